//! Hand-off of finished meshes to whatever renders or stores them.

use crate::config::RoundingParams;
use crate::errors::ExportError;
use crate::loft::MeshBuffer;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// A named mesh together with the edge rounding its consumer should apply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub name: String,
    pub rounding: RoundingParams,
    pub mesh: MeshBuffer,
}

impl SceneObject {
    pub fn new(name: &str, mesh: MeshBuffer, rounding: RoundingParams) -> Self {
        Self {
            name: name.to_string(),
            rounding,
            mesh,
        }
    }
}

/// Receives ownership of finished scene objects. Implementations decide how the object is
/// persisted or displayed and how the rounding is realized.
pub trait MeshSink {
    type Error;

    fn submit(&mut self, object: SceneObject) -> Result<(), Self::Error>;
}

/// Keeps submitted objects in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    objects: Vec<SceneObject>,
}

impl MemorySink {
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<SceneObject> {
        self.objects
    }
}

impl MeshSink for MemorySink {
    type Error = std::convert::Infallible;

    fn submit(&mut self, object: SceneObject) -> Result<(), Self::Error> {
        self.objects.push(object);
        Ok(())
    }
}

/// Writes objects as Wavefront OBJ quads. OBJ has no notion of edge rounding, so the rounding is
/// written as a comment ahead of the object.
pub struct ObjSink<W: Write> {
    writer: W,
    vertex_base: usize,
}

impl<W: Write> ObjSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            vertex_base: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeshSink for ObjSink<W> {
    type Error = ExportError;

    fn submit(&mut self, object: SceneObject) -> Result<(), ExportError> {
        let r = &object.rounding;
        writeln!(
            self.writer,
            "# rounding width {} segments {} profile {}",
            r.width, r.segments, r.profile
        )?;
        writeln!(self.writer, "o {}", object.name)?;

        for v in object.mesh.vertices() {
            writeln!(self.writer, "v {} {} {}", v.x, v.y, v.z)?;
        }

        // OBJ indices are 1-based and count across every object in the file
        let base = self.vertex_base + 1;
        for f in object.mesh.faces() {
            writeln!(
                self.writer,
                "f {} {} {} {}",
                f[0] + base,
                f[1] + base,
                f[2] + base,
                f[3] + base
            )?;
        }

        self.vertex_base += object.mesh.vertex_count();
        self.writer.flush()?;
        debug!(name = %object.name, "wrote obj object");
        Ok(())
    }
}

/// Writes each object as one JSON document per line
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeshSink for JsonSink<W> {
    type Error = ExportError;

    fn submit(&mut self, object: SceneObject) -> Result<(), ExportError> {
        serde_json::to_writer(&mut self.writer, &object)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        debug!(name = %object.name, "wrote json object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncollide2d::na::Point3;
    use serde_json::Value;

    fn quad_mesh() -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.5));
        mesh.add_face([0, 1, 2, 3]).unwrap();
        mesh
    }

    #[test]
    fn test_obj_output() {
        let mut sink = ObjSink::new(Vec::new());
        sink.submit(SceneObject::new("Quad", quad_mesh(), RoundingParams::default()))
            .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let expected = "# rounding width 8 segments 25 profile 0.5\n\
                        o Quad\n\
                        v 0 0 0\n\
                        v 1 0 0\n\
                        v 1 1 0\n\
                        v 0 1 0.5\n\
                        f 1 2 3 4\n";
        assert_eq!(expected, text);
    }

    #[test]
    fn test_obj_indices_continue_across_objects() {
        let mut sink = ObjSink::new(Vec::new());
        sink.submit(SceneObject::new("A", quad_mesh(), RoundingParams::default()))
            .unwrap();
        sink.submit(SceneObject::new("B", quad_mesh(), RoundingParams::default()))
            .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(vec!["f 1 2 3 4", "f 5 6 7 8"], faces);
    }

    #[test]
    fn test_json_output() {
        let mut sink = JsonSink::new(Vec::new());
        sink.submit(SceneObject::new("Quad", quad_mesh(), RoundingParams::default()))
            .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let value: Value = serde_json::from_str(text.trim()).unwrap();

        assert_eq!("Quad", value["name"]);
        assert_eq!(25, value["rounding"]["segments"]);
        assert_eq!(4, value["mesh"]["vertices"].as_array().unwrap().len());
        assert_eq!(0.5, value["mesh"]["vertices"][3]["z"]);
        assert_eq!(serde_json::json!([[0, 1, 2, 3]]), value["mesh"]["faces"]);
        assert!(value["mesh"].get("face_keys").is_none());
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::default();
        sink.submit(SceneObject::new("A", quad_mesh(), RoundingParams::default()))
            .unwrap();
        sink.submit(SceneObject::new("B", MeshBuffer::new(), RoundingParams::default()))
            .unwrap();

        let names: Vec<String> = sink.into_objects().into_iter().map(|o| o.name).collect();
        assert_eq!(vec!["A", "B"], names);
    }
}
