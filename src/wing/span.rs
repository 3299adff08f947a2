use crate::airfoil::section::Placement;
use crate::algorithms::{lerp, linspace};
use serde::{Deserialize, Serialize};

/// Piecewise linear dihedral law along the span. Angles are in degrees.
///
/// Inboard of `bend_start` the dihedral is constant at `root`. Between `bend_start` and `bend_end`
/// it blends from `root` to `mid`, and outboard of `bend_end` it blends from `mid` to `tip`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DihedralSchedule {
    pub bend_start: f64,
    pub bend_end: f64,
    pub root: f64,
    pub mid: f64,
    pub tip: f64,
}

impl Default for DihedralSchedule {
    fn default() -> Self {
        Self {
            bend_start: 350.0,
            bend_end: 750.0,
            root: 0.0,
            mid: 10.0,
            tip: 5.0,
        }
    }
}

impl DihedralSchedule {
    /// The dihedral angle in degrees at spanwise position `y` of a wing with the given span.
    ///
    /// The branches are tested in order, so when `bend_start == bend_end` the blend between them
    /// has zero width and is never evaluated.
    pub fn angle_at(&self, y: f64, span: f64) -> f64 {
        if y <= self.bend_start {
            self.root
        } else if y < self.bend_end {
            let t = (y - self.bend_start) / (self.bend_end - self.bend_start);
            lerp(self.root, self.mid, t)
        } else {
            let width = span - self.bend_end;
            let t = if width == 0.0 {
                0.0
            } else {
                (y - self.bend_end) / width
            };
            lerp(self.mid, self.tip, t)
        }
    }
}

/// One sampled position along the wing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpanStation {
    pub position: f64,
    pub dihedral: f64,
    pub offset: f64,
    pub chord: f64,
}

impl SpanStation {
    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.chord, self.offset)
    }
}

/// Lays out `count` stations evenly from the root to `span`.
///
/// The vertical offset is integrated step by step, each step using the dihedral at its outboard
/// end: `offset_i = offset_{i-1} + (y_i - y_{i-1}) * tan(angle_i)`, starting from zero at the
/// root. The chord tapers linearly from `root_chord` to `tip_chord`.
pub fn plan_span(
    span: f64,
    root_chord: f64,
    tip_chord: f64,
    count: usize,
    schedule: &DihedralSchedule,
) -> Vec<SpanStation> {
    linspace(0.0, span, count)
        .into_iter()
        .scan((0.0, 0.0), |(prev_y, prev_offset), y| {
            let dihedral = schedule.angle_at(y, span);
            let offset = *prev_offset + (y - *prev_y) * dihedral.to_radians().tan();
            *prev_y = y;
            *prev_offset = offset;

            Some(SpanStation {
                position: y,
                dihedral,
                offset,
                chord: lerp(root_chord, tip_chord, y / span),
            })
        })
        .collect()
}
