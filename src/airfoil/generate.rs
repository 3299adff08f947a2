use crate::airfoil::CamberStation;
use crate::errors::AirfoilError;
use ncollide2d::na::Point2;

/// An AirfoilGenerator is an entity which can generate the position and slope of the mean camber
/// line and the airfoil half thickness at fractions of the chord. This provides the information
/// necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the slope dy/dx of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the thickness of the airfoil measured from the camber line to one surface, at a
    /// fraction from 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// Computes the upper and lower surface points by laying the half thickness off perpendicular
    /// to the camber line.
    fn station_at(&self, x: f64) -> CamberStation {
        let c = self.camber_line(x);
        let yt = self.half_thickness(x);
        let theta = self.camber_slope(x).atan();
        let (sin, cos) = theta.sin_cos();

        CamberStation::new(
            c,
            Point2::new(c.x - yt * sin, c.y + yt * cos),
            Point2::new(c.x + yt * sin, c.y - yt * cos),
        )
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 4412 airfoil has a 4% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
///
/// All values are for a unit chord; scaling and placement happen when a section is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4Digit {
    t: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 4412 t_max should be 0.12
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 4412 this value should
    /// be set to 0.04
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 4412 this values should be 0.4
    pub fn new(t_max: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    /// Parses a designation such as "4412" or "NACA 0012".
    pub fn from_designation(designation: &str) -> Result<Naca4Digit, AirfoilError> {
        let invalid = || AirfoilError::InvalidDesignation(designation.to_string());

        let trimmed = designation.trim();
        let digits = trimmed
            .strip_prefix("NACA")
            .or_else(|| trimmed.strip_prefix("naca"))
            .unwrap_or(trimmed)
            .trim();

        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let m: u32 = digits[0..1].parse().map_err(|_| invalid())?;
        let p: u32 = digits[1..2].parse().map_err(|_| invalid())?;
        let t: u32 = digits[2..4].parse().map_err(|_| invalid())?;

        Ok(Naca4Digit::new(
            t as f64 / 100.0,
            m as f64 / 100.0,
            p as f64 / 10.0,
        ))
    }

    fn is_symmetric(&self) -> bool {
        self.m == 0.0 || self.p < 1e-6
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        };

        Point2::new(x, y)
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powi(2)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    }
}
