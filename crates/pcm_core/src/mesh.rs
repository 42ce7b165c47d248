//! Mesh geometry representation for PCM imports.
//!
//! `Geometry` is the raw reshape of a vertex buffer and an index buffer:
//! positions, edges and triangles with no welding or cleanup. `MeshData`
//! is the validated object a host receives, with room for custom
//! per-mesh attributes.

use std::collections::BTreeMap;

use pcm_math::{Bounds, Vec3};
use serde::Serialize;
use thiserror::Error;

/// Structural problems found when validating a `Geometry`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("face {face} references vertex {vertex_index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        vertex_index: u32,
        vertex_count: usize,
    },

    #[error("edge {edge} references vertex {vertex_index}, but the mesh has {vertex_count} vertices")]
    EdgeIndexOutOfRange {
        edge: usize,
        vertex_index: u32,
        vertex_count: usize,
    },
}

/// Vertex positions, edges and triangle faces decoded from flat buffers.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Geometry {
    /// Vertex positions (one Vec3 per vertex)
    pub vertices: Vec<Vec3>,

    /// Standalone edges. Always empty for triangulated input.
    pub edges: Vec<[u32; 2]>,

    /// Triangles as vertex index triplets
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Create a geometry from already-grouped data. No validation is done.
    pub fn new(vertices: Vec<Vec3>, edges: Vec<[u32; 2]>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Local-space bounds of all vertices.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
    }

    /// Check that every edge and face only references existing vertices.
    ///
    /// Reports the first offending element.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        let in_range = |i: u32| (i as usize) < vertex_count;

        for (edge, indices) in self.edges.iter().enumerate() {
            if let Some(&vertex_index) = indices.iter().find(|&&i| !in_range(i)) {
                return Err(GeometryError::EdgeIndexOutOfRange {
                    edge,
                    vertex_index,
                    vertex_count,
                });
            }
        }

        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&vertex_index) = indices.iter().find(|&&i| !in_range(i)) {
                return Err(GeometryError::FaceIndexOutOfRange {
                    face,
                    vertex_index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}

/// A validated mesh ready to hand to a host, plus custom attributes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeshData {
    geometry: Geometry,

    /// Custom vector attributes keyed by name (e.g. `"position"`)
    pub attributes: BTreeMap<String, Vec3>,
}

impl MeshData {
    /// Validate `geometry` and wrap it. Fails if any index is out of range.
    pub fn from_geometry(geometry: Geometry) -> Result<Self, GeometryError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            attributes: BTreeMap::new(),
        })
    }

    /// The validated geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Store a custom vector attribute, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Vec3) {
        self.attributes.insert(key.into(), value);
    }

    /// Look up a custom vector attribute.
    pub fn attribute(&self, key: &str) -> Option<Vec3> {
        self.attributes.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Geometry {
        Geometry::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            Vec::new(),
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn test_geometry_counts() {
        let geometry = quad();
        assert_eq!(geometry.vertex_count(), 4);
        assert_eq!(geometry.face_count(), 2);
        assert!(geometry.edges.is_empty());
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_geometry_bounds() {
        let bounds = quad().bounds();
        assert!((bounds.min - Vec3::ZERO).length() < 0.001);
        assert!((bounds.max - Vec3::new(1.0, 1.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_validate_rejects_out_of_range_face() {
        let mut geometry = quad();
        geometry.faces.push([1, 2, 4]);

        let err = geometry.validate().unwrap_err();
        assert_eq!(
            err,
            GeometryError::FaceIndexOutOfRange {
                face: 2,
                vertex_index: 4,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_edge() {
        let mut geometry = quad();
        geometry.edges.push([0, 9]);

        assert!(matches!(
            geometry.validate(),
            Err(GeometryError::EdgeIndexOutOfRange { vertex_index: 9, .. })
        ));
    }

    #[test]
    fn test_empty_geometry_is_valid() {
        let geometry = Geometry::default();
        assert!(geometry.validate().is_ok());
        assert!(geometry.bounds().is_empty());
    }

    #[test]
    fn test_faces_without_vertices_are_invalid() {
        // Padding a lone index with zero still needs vertex 0 to exist
        let geometry = Geometry::new(Vec::new(), Vec::new(), vec![[0, 0, 0]]);
        assert!(MeshData::from_geometry(geometry).is_err());
    }

    #[test]
    fn test_mesh_data_attributes() {
        let mut mesh = MeshData::from_geometry(quad()).unwrap();
        assert_eq!(mesh.attribute("position"), None);

        mesh.set_attribute("position", Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.attribute("position"), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(mesh.geometry().face_count(), 2);
    }
}
