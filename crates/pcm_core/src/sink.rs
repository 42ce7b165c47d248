//! Hand-off of built meshes to a host application.
//!
//! Hosts implement [`MeshSink`] to turn records into their own objects.
//! [`import_into`] drives the sink with no logic of its own.

use pcm_math::Vec3;

use crate::scene::ImportReport;

/// Object factory provided by a host.
pub trait MeshSink {
    /// Host-side object handle.
    type Object;

    /// Create a renderable mesh object.
    fn create_object(
        &mut self,
        name: &str,
        vertices: &[Vec3],
        edges: &[[u32; 2]],
        faces: &[[u32; 3]],
    ) -> Self::Object;

    /// Place an object in the host scene.
    fn set_placement(&mut self, object: &mut Self::Object, position: Vec3, scale: Vec3);
}

/// Create and place one host object per built record, in report order.
pub fn import_into<S: MeshSink>(report: &ImportReport, sink: &mut S) -> Vec<S::Object> {
    report
        .records
        .iter()
        .map(|record| {
            let geometry = record.mesh.geometry();
            let mut object = sink.create_object(
                &record.name,
                &geometry.vertices,
                &geometry.edges,
                &geometry.faces,
            );
            sink.set_placement(&mut object, record.placement.position, record.placement.scale);
            object
        })
        .collect()
}

/// An object captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedObject {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
    pub faces: Vec<[u32; 3]>,
    pub location: Vec3,
    pub scale: Vec3,
}

/// In-memory sink that keeps every created object.
///
/// Objects are identified by their index in [`RecordingSink::objects`].
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub objects: Vec<RecordedObject>,
}

impl MeshSink for RecordingSink {
    type Object = usize;

    fn create_object(
        &mut self,
        name: &str,
        vertices: &[Vec3],
        edges: &[[u32; 2]],
        faces: &[[u32; 3]],
    ) -> usize {
        self.objects.push(RecordedObject {
            name: name.to_string(),
            vertices: vertices.to_vec(),
            edges: edges.to_vec(),
            faces: faces.to_vec(),
            location: Vec3::ZERO,
            scale: Vec3::ONE,
        });
        self.objects.len() - 1
    }

    fn set_placement(&mut self, object: &mut usize, position: Vec3, scale: Vec3) {
        if let Some(recorded) = self.objects.get_mut(*object) {
            recorded.location = position;
            recorded.scale = scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playcanvas::{build_all, load_from_str};

    /// Sink that only logs the order of calls.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl MeshSink for CallLog {
        type Object = String;

        fn create_object(
            &mut self,
            name: &str,
            _vertices: &[Vec3],
            _edges: &[[u32; 2]],
            _faces: &[[u32; 3]],
        ) -> String {
            self.calls.push(format!("create {name}"));
            name.to_string()
        }

        fn set_placement(&mut self, object: &mut String, _position: Vec3, _scale: Vec3) {
            self.calls.push(format!("place {object}"));
        }
    }

    const SCENE: &str = r#"{ "model": {
        "nodes": [
            { "name": "Left Wall", "position": [-1, 0, 0], "rotation": [0, 0, 0], "scale": [1, 2, 1] },
            { "name": "Right Wall", "position": [1, 0, 0], "rotation": [0, 180, 0], "scale": [1, 2, 1] }
        ],
        "meshInstances": [
            { "node": 0, "mesh": 0 },
            { "node": 1, "mesh": 3 },
            { "node": 1, "mesh": 0 }
        ],
        "vertices": [ { "position": { "data": [0, 0, 0, 1, 0, 0, 0, 1, 0] } } ],
        "meshes": [ { "indices": [0, 1, 2] } ]
    } }"#;

    #[test]
    fn test_sink_called_once_per_record_in_order() {
        let report = build_all(&load_from_str(SCENE).unwrap(), "walls.json");
        let mut sink = CallLog::default();

        let objects = import_into(&report, &mut sink);

        assert_eq!(objects, vec!["Left_Wall", "Right_Wall"]);
        assert_eq!(
            sink.calls,
            vec![
                "create Left_Wall",
                "place Left_Wall",
                "create Right_Wall",
                "place Right_Wall",
            ]
        );
    }

    #[test]
    fn test_recording_sink_keeps_geometry_and_placement() {
        let report = build_all(&load_from_str(SCENE).unwrap(), "walls.json");
        let mut sink = RecordingSink::default();

        let ids = import_into(&report, &mut sink);

        assert_eq!(ids, vec![0, 1]);
        let right = &sink.objects[1];
        assert_eq!(right.name, "Right_Wall");
        assert_eq!(right.vertices.len(), 3);
        assert!(right.edges.is_empty());
        assert_eq!(right.faces, vec![[0, 1, 2]]);
        assert_eq!(right.location, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(right.scale, Vec3::new(1.0, 2.0, 1.0));
    }
}
