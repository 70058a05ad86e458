//! Report command handler for sweeping a list of curve radii.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use curvelimit_lib::{sweep_radii, SearchConfig, VehicleModel, REFERENCE_RADII};

use crate::output::{render_json, render_report_text, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the report subcommand.
///
/// Uses the reference radii when `radii` is empty.
pub fn handle_report(
    model: &VehicleModel,
    config: &SearchConfig,
    radii: &[f64],
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let radii = if radii.is_empty() {
        &REFERENCE_RADII[..]
    } else {
        radii
    };

    info!(radii = radii.len(), steps = config.stability.steps, "computing safe speed report");
    let rows = sweep_radii(model, radii, config).context("failed to compute safe speed report")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_report_text(&mut out, &rows, palette)?,
        OutputFormat::Json => render_json(&mut out, &rows)?,
    }
    out.flush()?;
    Ok(())
}
