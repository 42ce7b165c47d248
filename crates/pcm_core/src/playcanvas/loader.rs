//! JSON model loading.
//!
//! Reads the whole source, checks it is UTF-8 and parses it as JSON.
//! Nothing about the model layout is checked here; element lookups are
//! validated when instances are built.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::types::Document;

/// Errors that abort a whole import.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a JSON model from any reader.
pub fn load<R: Read>(mut source: R) -> LoadResult<Document> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    load_from_slice(&bytes)
}

/// Load a JSON model from a file.
///
/// # Example
///
/// ```ignore
/// use pcm_core::load_path;
///
/// let document = load_path("scene.json")?;
/// println!("{} mesh instances", document.mesh_instance_count());
/// ```
pub fn load_path<P: AsRef<Path>>(path: P) -> LoadResult<Document> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
    let document = load_from_slice(&bytes)?;
    log::info!(
        "Loaded {} ({} bytes, {} mesh instances)",
        path.display(),
        bytes.len(),
        document.mesh_instance_count()
    );
    Ok(document)
}

/// Load a JSON model from raw bytes, which must be UTF-8.
pub fn load_from_slice(bytes: &[u8]) -> LoadResult<Document> {
    let text = std::str::from_utf8(bytes)?;
    log::debug!("Decoded {} bytes of model text", bytes.len());
    load_from_str(text)
}

/// Load a JSON model from a string (useful for testing).
pub fn load_from_str(text: &str) -> LoadResult<Document> {
    let root: Value = serde_json::from_str(text)?;
    Ok(Document::from_value(root))
}
