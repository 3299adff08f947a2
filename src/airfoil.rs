use crate::algorithms::linspace;
use generate::AirfoilGenerator;
use ncollide2d::na::Point2;

pub mod generate;
pub mod section;

/// The camber line point and the two surface points at one chordwise fraction, in normalized
/// (unit chord) coordinates.
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// A sampled airfoil outline in normalized coordinates. The upper surface runs from the leading
/// edge to the trailing edge, the lower surface from the trailing edge back to the leading edge
/// and does not repeat the trailing edge sample.
pub struct Airfoil {
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    /// Samples `n` evenly spaced chord fractions over each surface of the generator's airfoil.
    pub fn sample<G: AirfoilGenerator + ?Sized>(generator: &G, n: usize) -> Airfoil {
        let upper = linspace(0.0, 1.0, n)
            .into_iter()
            .map(|x| generator.station_at(x).upper)
            .collect();

        let lower = linspace(1.0, 0.0, n)
            .into_iter()
            .skip(1)
            .map(|x| generator.station_at(x).lower)
            .collect();

        Airfoil { upper, lower }
    }

    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        result.extend_from_slice(&self.lower);
        result
    }
}
