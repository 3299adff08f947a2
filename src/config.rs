//! Wing parameters. Every field has a default, so a JSON document only needs the values it
//! changes.

use crate::airfoil::generate::Naca4Digit;
use crate::errors::ConfigError;
use crate::wing::sharklet::SharkletParams;
use crate::wing::span::DihedralSchedule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingParams {
    pub span: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    pub airfoil: AirfoilParams,
    /// Points sampled along each surface of a section
    pub samples: usize,
    /// Number of sections along the main wing, root and tip included
    pub stations: usize,
    pub dihedral: DihedralSchedule,
    pub sharklet: SharkletParams,
    pub rounding: RoundingParams,
}

impl Default for WingParams {
    fn default() -> Self {
        Self {
            span: 1200.0,
            root_chord: 230.0,
            tip_chord: 90.7,
            airfoil: AirfoilParams::default(),
            samples: 100,
            stations: 15,
            dihedral: DihedralSchedule::default(),
            sharklet: SharkletParams::default(),
            rounding: RoundingParams::default(),
        }
    }
}

impl WingParams {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// NACA 4-digit section shape, as fractions of the chord
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilParams {
    pub thickness: f64,
    pub camber: f64,
    pub camber_position: f64,
}

impl Default for AirfoilParams {
    fn default() -> Self {
        Self {
            thickness: 0.12,
            camber: 0.04,
            camber_position: 0.4,
        }
    }
}

impl AirfoilParams {
    pub fn generator(&self) -> Naca4Digit {
        Naca4Digit::new(self.thickness, self.camber, self.camber_position)
    }
}

/// Cosmetic edge rounding which the consumer of the mesh applies. The wing geometry itself never
/// uses these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingParams {
    pub width: f64,
    pub segments: u32,
    pub profile: f64,
}

impl Default for RoundingParams {
    fn default() -> Self {
        Self {
            width: 8.0,
            segments: 25,
            profile: 0.5,
        }
    }
}
