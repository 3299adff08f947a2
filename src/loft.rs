//! Bridges a sequence of closed cross-sections into an open quad mesh.

use crate::airfoil::section::Section;
use crate::errors::{FaceRejection, LoftError};
use crate::geometry::distances3::shortest_edge;
use crate::serialize::point3_seq;
use itertools::Itertools;
use ncollide2d::na::Point3;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

pub type Quad = [usize; 4];

/// A flat list of vertices and the quad faces which index into it. Vertices are identified by
/// their position in the list, never merged by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffer {
    #[serde(serialize_with = "point3_seq")]
    vertices: Vec<Point3<f64>>,
    faces: Vec<Quad>,

    #[serde(skip)]
    face_keys: HashMap<Quad, usize>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Quad] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Appends a vertex and returns its index
    pub fn add_vertex(&mut self, point: Point3<f64>) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Adds a quad and returns its index. A face which uses a vertex twice, or which covers the
    /// same vertices as an existing face in any order, is refused.
    pub fn add_face(&mut self, face: Quad) -> Result<usize, FaceRejection> {
        let count = self.vertices.len();
        if let Some(&index) = face.iter().find(|&&i| i >= count) {
            return Err(FaceRejection::IndexOutOfRange { index, count });
        }

        let mut key = face;
        key.sort_unstable();
        if let Some((a, _)) = key.iter().tuple_windows().find(|(a, b)| a == b) {
            return Err(FaceRejection::RepeatedVertex(*a));
        }

        if let Some(&existing) = self.face_keys.get(&key) {
            return Err(FaceRejection::Duplicate(existing));
        }

        let index = self.faces.len();
        self.faces.push(face);
        self.face_keys.insert(key, index);
        Ok(index)
    }

    /// The corner points of a face, in winding order
    pub fn face_points(&self, face: usize) -> Option<[Point3<f64>; 4]> {
        let f = self.faces.get(face)?;
        Some((*f).map(|i| self.vertices[i]))
    }

    /// Indices of faces with at least one edge shorter than `tol`. Such faces are kept in the mesh
    /// since their vertices are distinct, but they have no area along the collapsed edge.
    pub fn collapsed_faces(&self, tol: f64) -> Vec<usize> {
        (0..self.faces.len())
            .filter(|&i| {
                self.face_points(i)
                    .and_then(|corners| shortest_edge(&corners))
                    .is_some_and(|d| d < tol)
            })
            .collect()
    }
}

/// A face which the mesher attempted but did not create
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedFace {
    pub section: usize,
    pub point: usize,
    pub reason: FaceRejection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoftReport {
    pub skipped: Vec<SkippedFace>,
}

/// Lofts the sections into a mesh. Every section must have the same number of points. The
/// vertex list is every section's points in order, and each adjacent pair of sections `i, i+1` is
/// joined by one quad per pair of consecutive points `j, j+1`, wound as
/// `(i, j), (i, j+1), (i+1, j+1), (i+1, j)`.
///
/// The mesh is left open at the first and last sections. Degenerate or duplicate faces are skipped
/// and listed in the report; a mismatch in point counts fails before anything is built.
pub fn loft(sections: &[Section]) -> Result<(MeshBuffer, LoftReport), LoftError> {
    let mut mesh = MeshBuffer::new();
    let mut report = LoftReport::default();

    let expected = match sections.first() {
        Some(s) => s.len(),
        None => return Ok((mesh, report)),
    };

    if let Some((index, s)) = sections.iter().enumerate().find(|(_, s)| s.len() != expected) {
        return Err(LoftError::MismatchedSection {
            index,
            expected,
            found: s.len(),
        });
    }

    for section in sections.iter() {
        for p in section.points() {
            mesh.add_vertex(*p);
        }
    }

    for (i, _) in (0..sections.len()).tuple_windows::<(_, _)>() {
        let row = i * expected;
        let next = row + expected;

        for (j, k) in (0..expected).tuple_windows() {
            let face = [row + j, row + k, next + k, next + j];
            match mesh.add_face(face) {
                Ok(_) => {}
                Err(reason @ (FaceRejection::RepeatedVertex(_) | FaceRejection::Duplicate(_))) => {
                    debug!(section = i, point = j, %reason, "skipping face");
                    report.skipped.push(SkippedFace {
                        section: i,
                        point: j,
                        reason,
                    });
                }
                Err(FaceRejection::IndexOutOfRange { index, count }) => {
                    return Err(LoftError::IndexOutOfRange { index, count })
                }
            }
        }
    }

    debug!(
        sections = sections.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        skipped = report.skipped.len(),
        "lofted sections"
    );

    Ok((mesh, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::Naca4Digit;
    use crate::airfoil::section::{section_points, Placement};
    use ncollide2d::na::Point2;
    use test_case::test_case;

    fn square(y: f64) -> Section {
        let contour = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        Section::from_contour(&contour, &Placement::new(y, 1.0, 0.0))
    }

    fn airfoils(count: usize, samples: usize) -> Vec<Section> {
        let naca = Naca4Digit::new(0.12, 0.04, 0.4);
        (0..count)
            .map(|i| section_points(&naca, samples, &Placement::new(i as f64 * 10.0, 100.0, 0.0)))
            .collect()
    }

    #[test_case(2, 4)]
    #[test_case(5, 10)]
    #[test_case(18, 100)]
    fn test_face_count(s: usize, n: usize) {
        let sections = airfoils(s, n);
        let p = sections[0].len();
        let (mesh, report) = loft(&sections).unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(s * p, mesh.vertex_count());
        assert_eq!((s - 1) * (p - 1), mesh.face_count());
    }

    #[test]
    fn test_face_winding() {
        let sections = vec![square(0.0), square(1.0)];
        let (mesh, _) = loft(&sections).unwrap();

        assert_eq!(10, mesh.vertex_count());
        assert_eq!(4, mesh.face_count());
        assert_eq!([0, 1, 6, 5], mesh.faces()[0]);
        assert_eq!([3, 4, 9, 8], mesh.faces()[3]);
    }

    #[test]
    fn test_vertices_keep_section_order() {
        let sections = airfoils(3, 10);
        let (mesh, _) = loft(&sections).unwrap();
        let expected: Vec<Point3<f64>> = sections
            .iter()
            .flat_map(|s| s.points().iter().copied())
            .collect();
        assert_eq!(expected.as_slice(), mesh.vertices());
    }

    #[test]
    fn test_every_index_in_range() {
        let (mesh, _) = loft(&airfoils(4, 30)).unwrap();
        assert!(mesh
            .faces()
            .iter()
            .flatten()
            .all(|&i| i < mesh.vertex_count()));
    }

    #[test]
    fn test_faces_only_join_adjacent_sections() {
        let p = 20;
        let (mesh, _) = loft(&airfoils(6, 10)).unwrap();
        for f in mesh.faces() {
            let rows: Vec<usize> = f.iter().map(|i| i / p).collect();
            let lo = *rows.iter().min().unwrap();
            let hi = *rows.iter().max().unwrap();
            assert_eq!(1, hi - lo);
        }
    }

    #[test]
    fn test_mismatched_sections_fail_fast() {
        let sections = vec![airfoils(1, 10).remove(0), square(5.0)];
        let result = loft(&sections);
        assert_eq!(
            Err(LoftError::MismatchedSection {
                index: 1,
                expected: 20,
                found: 5
            }),
            result.map(|_| ())
        );
    }

    #[test]
    fn test_no_sections() {
        let (mesh, report) = loft(&[]).unwrap();
        assert_eq!(0, mesh.vertex_count());
        assert_eq!(0, mesh.face_count());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_single_section_has_no_faces() {
        let (mesh, _) = loft(&airfoils(1, 10)).unwrap();
        assert_eq!(20, mesh.vertex_count());
        assert_eq!(0, mesh.face_count());
    }

    #[test]
    fn test_coincident_sections_keep_their_faces() {
        let sections = vec![square(0.0), square(0.0), square(1.0)];
        let (mesh, report) = loft(&sections).unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(8, mesh.face_count());
        assert_eq!(vec![0, 1, 2, 3], mesh.collapsed_faces(1e-9));
    }

    #[test]
    fn test_closing_point_collapses_last_face() {
        // The lower surface ends on the leading edge and the closing point repeats it, so the last
        // face of each band has a zero length edge. It is still a distinct face.
        let (mesh, report) = loft(&airfoils(2, 10)).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(19, mesh.face_count());
        assert_eq!(vec![18], mesh.collapsed_faces(1e-9));
    }

    #[test]
    fn test_add_face_rejects_duplicate() {
        let mut mesh = MeshBuffer::new();
        for i in 0..4 {
            mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0));
        }

        assert_eq!(Ok(0), mesh.add_face([0, 1, 2, 3]));
        assert_eq!(Err(FaceRejection::Duplicate(0)), mesh.add_face([2, 3, 0, 1]));
        assert_eq!(1, mesh.face_count());
    }

    #[test]
    fn test_add_face_rejects_repeated_vertex() {
        let mut mesh = MeshBuffer::new();
        for i in 0..4 {
            mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0));
        }

        let result = mesh.add_face([0, 1, 1, 3]);
        assert_eq!(Err(FaceRejection::RepeatedVertex(1)), result);
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_add_face_out_of_range_is_not_recoverable() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(Point3::origin());

        let result = mesh.add_face([0, 1, 2, 3]);
        assert_eq!(
            Err(FaceRejection::IndexOutOfRange { index: 1, count: 1 }),
            result
        );
        assert!(!result.unwrap_err().is_recoverable());
    }
}
