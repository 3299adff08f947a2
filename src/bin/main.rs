use anyhow::{Context, Result};
use gull_wing::config::WingParams;
use gull_wing::export::ObjSink;
use gull_wing::wing::GullWing;
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const COLLAPSE_TOL: f64 = 1e-9;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let params = match args.get(1) {
        Some(path) => WingParams::load(Path::new(path))?,
        None => WingParams::default(),
    };
    let output = args.get(2).map(String::as_str).unwrap_or("gull_wing.obj");

    let model = GullWing::new(params).build()?;

    let collapsed = model.mesh.collapsed_faces(COLLAPSE_TOL);
    if !collapsed.is_empty() {
        tracing::warn!(
            count = collapsed.len(),
            "faces with a collapsed edge, the consumer may need to merge by distance"
        );
    }

    let height = model.max_height().unwrap_or(0.0);
    let file = File::create(output).with_context(|| format!("creating {}", output))?;
    let mut sink = ObjSink::new(BufWriter::new(file));
    model.submit("GullWing", &mut sink)?;

    tracing::info!(output, height, "gull wing with sharklet written");
    Ok(())
}
