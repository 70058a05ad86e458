//! Speed command handler for a single curve radius.

use std::io::{self, Write};

use anyhow::{Context, Result};

use curvelimit_lib::{sweep_radii, SearchConfig, VehicleModel};

use crate::output::{render_json, render_speed_text, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the speed subcommand.
pub fn handle_speed(
    model: &VehicleModel,
    config: &SearchConfig,
    radius: f64,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let rows = sweep_radii(model, &[radius], config)
        .with_context(|| format!("failed to compute safe speed for a {radius} m curve"))?;
    let row = rows
        .first()
        .ok_or_else(|| anyhow::anyhow!("sweep returned no result for radius {radius}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_speed_text(&mut out, row, palette)?,
        OutputFormat::Json => render_json(&mut out, row)?,
    }
    out.flush()?;
    Ok(())
}
