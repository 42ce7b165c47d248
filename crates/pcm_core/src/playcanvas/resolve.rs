//! Geometry reconstruction from vertex and index buffers.

use pcm_math::{chunk_or_default, Vec3};

use crate::mesh::Geometry;

use super::builder::BuildResult;
use super::types::Document;

/// Reshape the buffers of mesh `mesh_id` into a `Geometry`.
///
/// `model.vertices[mesh_id].position.data` is grouped into positions and
/// `model.meshes[mesh_id].indices` into triangles, three values at a time
/// with zero padding. Nothing is welded, scaled or filtered, and face
/// indices are not checked here (see [`Geometry::validate`]).
pub fn resolve_geometry(document: &Document, mesh_id: usize) -> BuildResult<Geometry> {
    let vertex_buffer = document.vertex_buffer(mesh_id)?;
    let index_buffer = document.index_buffer(mesh_id)?;

    let vertices = chunk_or_default::<_, 3>(vertex_buffer.position.data)
        .map(Vec3::from)
        .collect();
    let faces = chunk_or_default::<_, 3>(index_buffer.indices).collect();

    Ok(Geometry::new(vertices, Vec::new(), faces))
}
