//! Per-instance mesh building.
//!
//! Every entry of `model.meshInstances` is built on its own. A failure
//! (bad reference, malformed element, face pointing past the vertex list)
//! is recorded against that instance and the batch moves on. Layout
//! problems that affect the whole document (no `model` object, a
//! collection that is not an array) are reported separately.

use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;

use crate::mesh::{GeometryError, MeshData};
use crate::options::ImportOptions;
use crate::scene::{BuildRecord, ImportReport, InstanceFailure, Placement};

use super::loader::{load_path, LoadResult};
use super::resolve::resolve_geometry;
use super::types::{Collection, Document, MeshInstance};

/// Custom attribute under which a node's position is stored on its mesh.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Errors found while building from a document.
///
/// `MissingModel` and `NotAnArray` describe the document layout; the
/// other variants are local to a single mesh instance.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("document has no 'model' object")]
    MissingModel,

    #[error("{collection} is not an array")]
    NotAnArray { collection: Collection },

    #[error("{collection}[{index}] is out of range ({len} entries)")]
    Reference {
        collection: Collection,
        index: usize,
        len: usize,
    },

    #[error("{collection}[{index}] is malformed: {source}")]
    Malformed {
        collection: Collection,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Geometry validation failed: {0}")]
    GeometryValidation(#[from] GeometryError),
}

/// Result type for per-instance operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Make a node name usable as an object name: spaces become underscores.
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Derive the report name from a file name: last path component up to the first dot.
pub fn import_name(filename: &str) -> &str {
    let file = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    file.split('.').next().unwrap_or(file)
}

/// Build one mesh instance into a record.
pub fn build_instance(document: &Document, instance: &MeshInstance) -> BuildResult<BuildRecord> {
    let node = document.node(instance.node)?;
    let name = sanitize_name(&node.name);

    let geometry = resolve_geometry(document, instance.mesh)?;
    let mut mesh = MeshData::from_geometry(geometry)?;
    mesh.set_attribute(POSITION_ATTRIBUTE, node.position);

    // Rotation is read but placement only carries position and scale
    log::debug!("Node '{}' rotation {:?} not applied", node.name, node.rotation);

    Ok(BuildRecord::new(
        name,
        mesh,
        Placement::new(node.position, node.scale),
    ))
}

/// Build the mesh instance at `index`, attaching context to any failure.
fn build_entry(
    document: &Document,
    index: usize,
    entry: BuildResult<MeshInstance>,
) -> Result<BuildRecord, InstanceFailure> {
    let instance = entry.map_err(|error| InstanceFailure {
        index,
        node: None,
        mesh: None,
        node_name: None,
        error,
    })?;

    let record = build_instance(document, &instance).map_err(|error| InstanceFailure {
        index,
        node: Some(instance.node),
        mesh: Some(instance.mesh),
        node_name: document.node(instance.node).ok().map(|n| n.name),
        error,
    })?;

    log::debug!(
        "Built mesh instance {} '{}' ({} vertices, {} faces)",
        index,
        record.name,
        record.mesh.geometry().vertex_count(),
        record.mesh.geometry().face_count()
    );

    Ok(record)
}

/// Build every mesh instance in document order.
///
/// Never fails: instances that cannot be built are logged and listed in
/// [`ImportReport::failures`], the rest end up in
/// [`ImportReport::records`].
pub fn build_all(document: &Document, filename: &str) -> ImportReport {
    let issues = layout_issues(document);

    let results = document
        .mesh_instances()
        .map(|(index, entry)| build_entry(document, index, entry));

    ImportReport::from_results(import_name(filename), results).with_issues(issues)
}

/// Same as [`build_all`], building instances on the rayon thread pool.
///
/// The report keeps document order.
pub fn build_all_parallel(document: &Document, filename: &str) -> ImportReport {
    let issues = layout_issues(document);

    let results: Vec<_> = (0..document.mesh_instance_count())
        .into_par_iter()
        .map(|index| build_entry(document, index, document.mesh_instance(index)))
        .collect();

    ImportReport::from_results(import_name(filename), results).with_issues(issues)
}

/// Load a JSON model from disk and build all of its mesh instances.
///
/// Only loading errors are returned; per-instance failures are in the report.
pub fn import_path<P: AsRef<Path>>(path: P, options: &ImportOptions) -> LoadResult<ImportReport> {
    let path = path.as_ref();
    log::debug!("Importing {} with {:?}", path.display(), options);

    let document = load_path(path)?;
    Ok(build_all(&document, &path.to_string_lossy()))
}

fn layout_issues(document: &Document) -> Vec<BuildError> {
    let issues = document.layout_issues();
    for issue in &issues {
        log::warn!("Document layout problem: {}", issue);
    }
    issues
}
