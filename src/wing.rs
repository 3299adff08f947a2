use crate::airfoil::section::{section_points, Placement, Section};
use crate::config::{RoundingParams, WingParams};
use crate::errors::WingError;
use crate::export::{MeshSink, SceneObject};
use crate::loft::{loft, LoftReport, MeshBuffer};
use sharklet::plan_sharklet;
use span::{plan_span, SpanStation};
use tracing::{debug, info};

pub mod sharklet;
pub mod span;

/// Builds the gull wing: stations along the span, the sharklet sections after the tip, and the
/// loft through all of them.
pub struct GullWing {
    params: WingParams,
}

impl GullWing {
    pub fn new(params: WingParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WingParams {
        &self.params
    }

    pub fn stations(&self) -> Vec<SpanStation> {
        let p = &self.params;
        plan_span(p.span, p.root_chord, p.tip_chord, p.stations, &p.dihedral)
    }

    /// Placements of every section in loft order: the wing stations from root to tip followed by
    /// the sharklet base, mid and tip.
    pub fn placements(&self, stations: &[SpanStation]) -> Result<Vec<Placement>, WingError> {
        let p = &self.params;
        let last = stations.last().ok_or(WingError::NoStations)?;

        let mut placements: Vec<Placement> = stations.iter().map(|s| s.placement()).collect();
        placements.extend(plan_sharklet(last, p.span, p.tip_chord, &p.sharklet));
        Ok(placements)
    }

    pub fn build(&self) -> Result<WingModel, WingError> {
        let stations = self.stations();
        debug!(count = stations.len(), "planned span stations");

        let placements = self.placements(&stations)?;
        let generator = self.params.airfoil.generator();
        let sections: Vec<Section> = placements
            .iter()
            .map(|pl| section_points(&generator, self.params.samples, pl))
            .collect();

        let (mesh, report) = loft(&sections)?;

        info!(
            sections = sections.len(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            skipped = report.skipped.len(),
            "built gull wing"
        );

        Ok(WingModel {
            stations,
            sections,
            mesh,
            report,
            rounding: self.params.rounding,
        })
    }
}

/// The result of one build. The mesh is handed off whole to a sink; nothing in the model is
/// changed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WingModel {
    pub stations: Vec<SpanStation>,
    pub sections: Vec<Section>,
    pub mesh: MeshBuffer,
    pub report: LoftReport,
    pub rounding: RoundingParams,
}

impl WingModel {
    /// Height of the highest point on the wing, sharklet included
    pub fn max_height(&self) -> Option<f64> {
        self.mesh.vertices().iter().map(|p| p.z).reduce(f64::max)
    }

    pub fn into_scene_object(self, name: &str) -> SceneObject {
        SceneObject::new(name, self.mesh, self.rounding)
    }

    /// Moves the mesh into the sink under the given object name
    pub fn submit<S: MeshSink>(self, name: &str, sink: &mut S) -> Result<(), S::Error> {
        sink.submit(self.into_scene_object(name))
    }
}
