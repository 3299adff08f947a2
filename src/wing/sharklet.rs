use crate::airfoil::section::Placement;
use crate::wing::span::SpanStation;
use serde::{Deserialize, Serialize};

/// The winglet which rises from the wingtip. It tapers linearly in chord and climbs linearly in
/// height rather than following the dihedral law of the main wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharkletParams {
    pub height: f64,
    /// Sharklet tip chord as a fraction of the wing tip chord
    pub tip_chord_ratio: f64,
}

impl Default for SharkletParams {
    fn default() -> Self {
        Self {
            height: 150.0,
            tip_chord_ratio: 0.6,
        }
    }
}

impl SharkletParams {
    pub fn tip_chord(&self, wing_tip_chord: f64) -> f64 {
        wing_tip_chord * self.tip_chord_ratio
    }
}

/// Places the base, mid and tip sections of the sharklet outboard of the last wing station.
///
/// The base repeats the wingtip at `span` with the tip chord and the last station's offset. The
/// mid and tip sections move out and up by half and all of the sharklet height.
pub fn plan_sharklet(
    last: &SpanStation,
    span: f64,
    tip_chord: f64,
    params: &SharkletParams,
) -> [Placement; 3] {
    let h = params.height;
    let end_chord = params.tip_chord(tip_chord);

    [
        Placement::new(span, tip_chord, last.offset),
        Placement::new(
            span + h / 2.0,
            (tip_chord + end_chord) / 2.0,
            last.offset + h / 2.0,
        ),
        Placement::new(span + h, end_chord, last.offset + h),
    ]
}
