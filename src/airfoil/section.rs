use crate::airfoil::generate::AirfoilGenerator;
use crate::airfoil::Airfoil;
use ncollide2d::bounding_volume::AABB;
use ncollide2d::na::{Point2, Point3};
use serde::Serialize;

/// Where a single cross-section sits on the wing: its spanwise position, its chord length, and
/// the vertical offset of its chord line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: f64,
    pub chord: f64,
    pub offset: f64,
}

impl Placement {
    pub fn new(position: f64, chord: f64, offset: f64) -> Self {
        Self {
            position,
            chord,
            offset,
        }
    }
}

/// A closed airfoil outline in model space. The x axis is chordwise, y is spanwise and z is
/// vertical. The last point is a copy of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    points: Vec<Point3<f64>>,
}

impl Section {
    /// Scales a normalized contour by the chord, places it at the spanwise position and vertical
    /// offset, and closes it by repeating the first point.
    pub fn from_contour(contour: &[Point2<f64>], placement: &Placement) -> Section {
        let mut points: Vec<Point3<f64>> = contour
            .iter()
            .map(|p| {
                Point3::new(
                    p.x * placement.chord,
                    placement.position,
                    p.y * placement.chord + placement.offset,
                )
            })
            .collect();

        if let Some(first) = points.first().copied() {
            points.push(first);
        }

        Section { points }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// The bounding box of the outline projected onto the chordwise/vertical plane
    pub fn profile_bounds(&self) -> Option<AABB<f64>> {
        let first = self.points.first()?;
        let mut mins = Point2::new(first.x, first.z);
        let mut maxs = mins;
        for p in self.points.iter() {
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.z);
        }

        Some(AABB::new(mins, maxs))
    }

    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

/// Builds one closed section of `2 * samples` points for the generator's airfoil at the given
/// placement. No validation of the chord is done; a zero chord collapses the section to a point.
pub fn section_points<G: AirfoilGenerator + ?Sized>(
    generator: &G,
    samples: usize,
    placement: &Placement,
) -> Section {
    let airfoil = Airfoil::sample(generator, samples);
    Section::from_contour(&airfoil.to_outer_contour(), placement)
}
