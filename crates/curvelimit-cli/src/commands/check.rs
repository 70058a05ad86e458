//! Check command handler for one stability evaluation.

use std::io::{self, Write};

use anyhow::{ensure, Context, Result};

use curvelimit_lib::{evaluate, StabilityConfig, VehicleModel, MPS_TO_KMH};

use crate::output::{render_check_text, render_json, CheckSummary, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the check subcommand.
///
/// Evaluates `model` on a curve of `radius` at `speed_kmh` and prints the
/// peaks against both thresholds. Exceeding a limit is a result, not an error.
pub fn handle_check(
    model: &VehicleModel,
    config: &StabilityConfig,
    radius: f64,
    speed_kmh: f64,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    ensure!(
        speed_kmh.is_finite() && speed_kmh >= 0.0,
        "speed must be a finite non-negative number of km/h, got {speed_kmh}"
    );

    let model = model.with_curve_radius(radius);
    let report = evaluate(&model, speed_kmh / MPS_TO_KMH, config).with_context(|| {
        format!("failed to evaluate stability on a {radius} m curve at {speed_kmh} km/h")
    })?;
    let summary = CheckSummary::new(radius, report);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_check_text(&mut out, &summary, palette)?,
        OutputFormat::Json => render_json(&mut out, &summary)?,
    }
    out.flush()?;
    Ok(())
}
