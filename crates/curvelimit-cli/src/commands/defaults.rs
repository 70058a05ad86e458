//! Defaults command handler.

use std::io::{self, Write};

use anyhow::Result;

use curvelimit_lib::VehicleModel;

use crate::output::render_json;

/// Print the resolved vehicle model as JSON.
///
/// The output is a valid `--config` file, so it doubles as a template.
pub fn handle_defaults(model: &VehicleModel) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_json(&mut out, model)?;
    out.flush()?;
    Ok(())
}
