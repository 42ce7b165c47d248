//! PlayCanvas-style JSON model support for PCM.
//!
//! This module loads JSON model exports and rebuilds one mesh per mesh
//! instance, placed at its node's position and scale.
//!
//! ## Supported Layout
//!
//! - `model.nodes`: `name`, `position`, `rotation`, `scale`
//! - `model.meshInstances`: `node` and `mesh` indices
//! - `model.vertices[i].position.data`: flat xyz positions
//! - `model.meshes[i].indices`: flat triangle indices
//!
//! ## Not Supported
//!
//! - Materials and textures
//! - Normals, UVs and other vertex attributes
//! - Skinning and animation
//! - Node hierarchy (`parents`); every node transform is used as-is
//! - Node rotation (parsed, not applied)
//!
//! # Example
//!
//! ```ignore
//! use pcm_core::playcanvas::{build_all, load_path};
//!
//! let document = load_path("path/to/model.json")?;
//! let report = build_all(&document, "model.json");
//! println!("Built {} meshes", report.built_count());
//! ```

mod builder;
mod loader;
mod resolve;
mod types;

pub use builder::*;
pub use loader::*;
pub use resolve::*;
pub use types::*;
