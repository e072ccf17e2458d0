use anyhow::{Context, Result};

use grapher::config::GrapherConfig;
use grapher::data::loader::load_file;
use grapher::{display, plot};

fn main() -> Result<()> {
    env_logger::init();

    let config = GrapherConfig::default();

    // ---- Load ----
    let time = load_file(&config.time_file)
        .with_context(|| format!("loading x values from {}", config.time_file.display()))?;
    let output = load_file(&config.output_file)
        .with_context(|| format!("loading y values from {}", config.output_file.display()))?;
    log::info!("Loaded {} time samples and {} output samples", time.len(), output.len());

    // ---- Compose ----
    let plot = plot::compose(&time, &output).context("pairing time and output samples")?;

    // ---- Render ----
    display::show(plot, &config)?;
    Ok(())
}
