//! Import results.
//!
//! A `BuildRecord` is one rebuilt mesh with its placement. An
//! `ImportReport` collects the records of one import in document order,
//! together with the instances that had to be skipped.

use pcm_math::{Bounds, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::mesh::MeshData;
use crate::playcanvas::BuildError;

/// Where a built object is placed in the host scene.
///
/// Only translation and scale are carried. Node rotation is not part of
/// the placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    /// Translation
    pub position: Vec3,

    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Placement {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    /// Convert to a 4x4 matrix: scale, then translate.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::IDENTITY, self.position)
    }
}

/// One successfully built mesh instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildRecord {
    /// Sanitized object name (spaces replaced with underscores)
    pub name: String,

    /// Validated mesh with its custom attributes
    pub mesh: MeshData,

    /// Object placement
    pub placement: Placement,
}

impl BuildRecord {
    pub fn new(name: String, mesh: MeshData, placement: Placement) -> Self {
        Self {
            name,
            mesh,
            placement,
        }
    }

    /// Bounds of the mesh after applying the placement.
    pub fn world_bounds(&self) -> Bounds {
        let matrix = self.placement.to_matrix();
        self.mesh
            .geometry()
            .vertices
            .iter()
            .fold(Bounds::EMPTY, |acc, v| acc.including(matrix.transform_point3(*v)))
    }
}

/// A mesh instance that could not be built.
#[derive(Debug)]
pub struct InstanceFailure {
    /// Position in `model.meshInstances`
    pub index: usize,

    /// Node id, if the instance entry itself could be read
    pub node: Option<usize>,

    /// Mesh id, if the instance entry itself could be read
    pub mesh: Option<usize>,

    /// Node name, if the node could be resolved
    pub node_name: Option<String>,

    pub error: BuildError,
}

/// Outcome of building every mesh instance of one document.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Import name (file name without extension)
    pub name: String,

    /// Built objects, in document order
    pub records: Vec<BuildRecord>,

    /// Skipped instances, in document order
    pub failures: Vec<InstanceFailure>,

    /// Document-level layout problems (missing `model`, non-array collections)
    pub issues: Vec<BuildError>,
}

impl ImportReport {
    /// Partition per-instance results, logging every failure.
    pub fn from_results<I>(name: &str, results: I) -> Self
    where
        I: IntoIterator<Item = Result<BuildRecord, InstanceFailure>>,
    {
        let mut report = Self {
            name: name.to_string(),
            ..Default::default()
        };

        for result in results {
            match result {
                Ok(record) => report.records.push(record),
                Err(failure) => {
                    log::warn!(
                        "Skipping mesh instance {} (node {:?} '{}', mesh {:?}): {}",
                        failure.index,
                        failure.node,
                        failure.node_name.as_deref().unwrap_or("?"),
                        failure.mesh,
                        failure.error
                    );
                    report.failures.push(failure);
                }
            }
        }

        log::info!(
            "Import '{}': built {} objects, skipped {}",
            report.name,
            report.built_count(),
            report.skipped_count()
        );

        report
    }

    /// Attach document-level layout problems.
    pub fn with_issues(mut self, issues: Vec<BuildError>) -> Self {
        self.issues = issues;
        self
    }

    /// Number of built objects.
    pub fn built_count(&self) -> usize {
        self.records.len()
    }

    /// Number of skipped instances.
    pub fn skipped_count(&self) -> usize {
        self.failures.len()
    }

    /// Get total vertex count across all built objects.
    pub fn total_vertex_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.mesh.geometry().vertex_count())
            .sum()
    }

    /// Get total triangle count across all built objects.
    pub fn total_face_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.mesh.geometry().face_count())
            .sum()
    }

    /// World-space bounds of all built objects.
    pub fn world_bounds(&self) -> Bounds {
        self.records
            .iter()
            .fold(Bounds::EMPTY, |acc, r| acc.union(r.world_bounds()))
    }
}
