//! PCM Core - mesh reconstruction from PlayCanvas-style JSON models.
//!
//! This crate provides:
//!
//! - **Mesh types**: `Geometry`, `MeshData`
//! - **Import results**: `BuildRecord`, `Placement`, `ImportReport`
//! - **JSON support**: document loading, per-instance mesh building
//! - **Host adapter**: the `MeshSink` trait and `import_into`
//!
//! # Example
//!
//! ```ignore
//! use pcm_core::{import_into, import_path, ImportOptions, RecordingSink};
//!
//! let report = import_path("scene.json", &ImportOptions::default())?;
//! println!("Built {} objects, skipped {}",
//!     report.built_count(),
//!     report.skipped_count());
//!
//! let mut sink = RecordingSink::default();
//! import_into(&report, &mut sink);
//! ```

pub mod mesh;
pub mod options;
pub mod playcanvas;
pub mod scene;
pub mod sink;

// Re-export commonly used types
pub use mesh::{Geometry, GeometryError, MeshData};
pub use options::{ImportOptions, ImportVariant};
pub use playcanvas::{
    build_all, build_all_parallel, import_path, load, load_from_str, load_path, resolve_geometry,
    BuildError, Document, LoadError,
};
pub use scene::{BuildRecord, ImportReport, InstanceFailure, Placement};
pub use sink::{import_into, MeshSink, RecordingSink};
