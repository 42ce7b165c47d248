// Re-export glam for convenience
pub use glam::*;

// PCM math types
mod bounds;
mod chunk;
pub use bounds::Bounds;
pub use chunk::{chunk, chunk_or_default, Chunked};
