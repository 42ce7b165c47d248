//! Typed views over a parsed PlayCanvas JSON model.
//!
//! The loader only checks that the input is well-formed JSON. Each
//! element (node, mesh instance, buffer) is decoded into its record type
//! when a consumer asks for it, so a single bad element fails only the
//! instance that touches it.

use std::fmt;

use pcm_math::Vec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::builder::{BuildError, BuildResult};

/// The indexable collections under `model`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Nodes,
    MeshInstances,
    Vertices,
    Meshes,
}

impl Collection {
    /// JSON key of the collection inside `model`.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Nodes => "nodes",
            Collection::MeshInstances => "meshInstances",
            Collection::Vertices => "vertices",
            Collection::Meshes => "meshes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model.{}", self.key())
    }
}

/// A named transform in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Display name, may contain spaces
    pub name: String,

    /// Translation
    pub position: Vec3,

    /// Euler rotation in degrees. Parsed but not applied on import.
    pub rotation: Vec3,

    /// Per-axis scale
    pub scale: Vec3,
}

/// Placement of one mesh at one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshInstance {
    /// Index into `model.nodes`
    pub node: usize,

    /// Index into both `model.vertices` and `model.meshes`
    pub mesh: usize,
}

/// A flat attribute stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeData {
    pub data: Vec<f32>,
}

/// Vertex attributes of one mesh. Only positions are read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexBuffer {
    pub position: AttributeData,
}

/// Triangle index list of one mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshIndexBuffer {
    pub indices: Vec<u32>,
}

/// A parsed scene document.
///
/// Read-only once loaded. Lookups return owned records, so results never
/// borrow from the document and it can be dropped after building.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The underlying JSON tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The `model` object, if present and actually an object.
    pub fn model(&self) -> Option<&Map<String, Value>> {
        self.root.get("model").and_then(Value::as_object)
    }

    /// Raw elements of a collection. Missing or non-array collections are empty.
    pub fn collection(&self, collection: Collection) -> &[Value] {
        self.try_collection(collection).unwrap_or(&[])
    }

    /// Raw elements of a collection, failing if the key holds something
    /// other than an array. A missing key or model counts as empty.
    pub fn try_collection(&self, collection: Collection) -> BuildResult<&[Value]> {
        match self.model().and_then(|model| model.get(collection.key())) {
            None => Ok(&[][..]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(BuildError::NotAnArray { collection }),
        }
    }

    /// Document-level layout problems: a missing `model` object, or
    /// collections that are present but not arrays.
    pub fn layout_issues(&self) -> Vec<BuildError> {
        if self.model().is_none() {
            return vec![BuildError::MissingModel];
        }

        [
            Collection::Nodes,
            Collection::MeshInstances,
            Collection::Vertices,
            Collection::Meshes,
        ]
        .into_iter()
        .filter_map(|collection| self.try_collection(collection).err())
        .collect()
    }

    /// Number of entries in `model.meshInstances`.
    pub fn mesh_instance_count(&self) -> usize {
        self.collection(Collection::MeshInstances).len()
    }

    /// Decode every mesh instance, in document order, keeping failures in place.
    pub fn mesh_instances(&self) -> impl Iterator<Item = (usize, BuildResult<MeshInstance>)> + '_ {
        self.collection(Collection::MeshInstances)
            .iter()
            .enumerate()
            .map(|(index, value)| (index, decode(Collection::MeshInstances, index, value)))
    }

    /// Decode the mesh instance at `index`.
    pub fn mesh_instance(&self, index: usize) -> BuildResult<MeshInstance> {
        self.element(Collection::MeshInstances, index)
    }

    /// Decode the node at `index`.
    pub fn node(&self, index: usize) -> BuildResult<Node> {
        self.element(Collection::Nodes, index)
    }

    /// Decode the vertex buffer at `index`.
    pub fn vertex_buffer(&self, index: usize) -> BuildResult<VertexBuffer> {
        self.element(Collection::Vertices, index)
    }

    /// Decode the index buffer at `index`.
    pub fn index_buffer(&self, index: usize) -> BuildResult<MeshIndexBuffer> {
        self.element(Collection::Meshes, index)
    }

    fn element<T: DeserializeOwned>(&self, collection: Collection, index: usize) -> BuildResult<T> {
        let items = self.try_collection(collection)?;
        let value = items.get(index).ok_or(BuildError::Reference {
            collection,
            index,
            len: items.len(),
        })?;
        decode(collection, index, value)
    }
}

fn decode<T: DeserializeOwned>(collection: Collection, index: usize, value: &Value) -> BuildResult<T> {
    T::deserialize(value).map_err(|source| BuildError::Malformed {
        collection,
        index,
        source,
    })
}
