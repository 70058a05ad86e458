//! Output formatting for safe speed reports.
//!
//! Renderers write to any [`Write`] sink so the command handlers can target
//! stdout while tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use curvelimit_lib::{FailureMode, SafeSpeed, StabilityReport, SweepRow, MPS_TO_KMH};

use crate::terminal::ColorPalette;

/// Literal shown for curves on which no speed is stable.
pub const NO_SOLUTION: &str = "No solution";

/// Peaks at or above this share of their threshold are highlighted.
const NEAR_LIMIT_RATIO: f64 = 0.9;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Single stability evaluation as emitted by the `check` command.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckSummary {
    pub curve_radius: f64,
    pub speed_kmh: f64,
    pub exceeds_limits: bool,
    pub failure_mode: Option<FailureMode>,
    pub report: StabilityReport,
}

impl CheckSummary {
    pub fn new(curve_radius: f64, report: StabilityReport) -> Self {
        Self {
            curve_radius,
            speed_kmh: report.velocity * MPS_TO_KMH,
            exceeds_limits: report.exceeds_limits(),
            failure_mode: report.failure_mode(),
            report,
        }
    }
}

/// Render sweep rows as the radius / speed table.
///
/// ```text
/// Radius (m) | Max Safe Speed (km/h)
/// -----------|-----------------
///         30 | 31.36
/// ```
pub fn render_report_text<W: Write>(
    out: &mut W,
    rows: &[SweepRow],
    palette: &ColorPalette,
) -> io::Result<()> {
    let ColorPalette {
        reset,
        header,
        gray,
        ..
    } = *palette;

    writeln!(out, "{header}Radius (m) | Max Safe Speed (km/h){reset}")?;
    writeln!(out, "{gray}-----------|-----------------{reset}")?;
    for row in rows {
        writeln!(
            out,
            "{:>10.0} | {}",
            row.curve_radius,
            format_speed(row.max_speed_mps, palette)
        )?;
    }
    Ok(())
}

/// Render a single radius result.
pub fn render_speed_text<W: Write>(
    out: &mut W,
    row: &SweepRow,
    palette: &ColorPalette,
) -> io::Result<()> {
    match row.max_speed_mps {
        SafeSpeed::Limit(speed) => writeln!(
            out,
            "Max safe speed on a {:.0} m curve: {} ({:.3} m/s)",
            row.curve_radius,
            format_speed(row.max_speed_mps, palette),
            speed
        ),
        SafeSpeed::NoSolution => writeln!(
            out,
            "Max safe speed on a {:.0} m curve: {}",
            row.curve_radius,
            format_speed(row.max_speed_mps, palette)
        ),
    }
}

/// Render the peaks and thresholds of one evaluation.
pub fn render_check_text<W: Write>(
    out: &mut W,
    summary: &CheckSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    let report = &summary.report;
    let reset = palette.reset;

    writeln!(
        out,
        "{}Curve {:.0} m at {:.2} km/h{}",
        palette.header, summary.curve_radius, summary.speed_kmh, reset
    )?;
    writeln!(
        out,
        "  tire angle {:.4} rad, support angle {:.4} rad",
        report.geometry.theta, report.geometry.alpha
    )?;
    writeln!(
        out,
        "  lateral force {}{:>12.1} N{} / friction limit {:>12.1} N",
        load_color(report.max_force, report.friction_limit, palette),
        report.max_force,
        reset,
        report.friction_limit
    )?;
    writeln!(
        out,
        "  torque        {}{:>12.1} Nm{} / weight torque  {:>12.1} Nm",
        load_color(report.max_torque, report.weight_torque, palette),
        report.max_torque,
        reset,
        report.weight_torque
    )?;

    match summary.failure_mode {
        Some(mode) => writeln!(out, "{}UNSAFE: {}{}", palette.unstable, mode, reset),
        None => writeln!(out, "{}SAFE{}", palette.stable, reset),
    }
}

/// Serialize any result as pretty JSON followed by a newline.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

fn format_speed(outcome: SafeSpeed, palette: &ColorPalette) -> String {
    match outcome.kilometers_per_hour() {
        Some(kmh) => format!("{}{:.2}{}", palette.stable, kmh, palette.reset),
        None => format!("{}{}{}", palette.unstable, NO_SOLUTION, palette.reset),
    }
}

fn load_color(value: f64, limit: f64, palette: &ColorPalette) -> &'static str {
    if value >= limit {
        palette.unstable
    } else if value >= limit * NEAR_LIMIT_RATIO {
        palette.warning
    } else {
        palette.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{report_with, row};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("render succeeds");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn report_table_matches_reference_layout() {
        let rows = [row(15.0, Some(6.434342913621549)), row(30.0, None)];
        let text = render(|out| render_report_text(out, &rows, &ColorPalette::plain()));
        assert_eq!(
            text,
            "Radius (m) | Max Safe Speed (km/h)\n\
             -----------|-----------------\n        \
             15 | 23.16\n        \
             30 | No solution\n"
        );
    }

    #[test]
    fn colored_table_highlights_infeasible_rows() {
        let rows = [row(30.0, None)];
        let text = render(|out| render_report_text(out, &rows, &ColorPalette::colored()));
        assert!(text.contains("\x1b[31mNo solution\x1b[0m"));
    }

    #[test]
    fn speed_line_includes_both_units() {
        let text = render(|out| {
            render_speed_text(out, &row(30.0, Some(10.0)), &ColorPalette::plain())
        });
        assert_eq!(text, "Max safe speed on a 30 m curve: 36.00 (10.000 m/s)\n");
    }

    #[test]
    fn check_text_names_failure_mode() {
        let summary = CheckSummary::new(30.0, report_with(20.0, 60_000.0, 10_000.0));
        let text = render(|out| render_check_text(out, &summary, &ColorPalette::plain()));
        assert!(text.contains("Curve 30 m at 72.00 km/h"));
        assert!(text.contains("UNSAFE: slide-out"));
    }

    #[test]
    fn check_text_reports_safe() {
        let summary = CheckSummary::new(30.0, report_with(5.0, 1_000.0, 1_000.0));
        let text = render(|out| render_check_text(out, &summary, &ColorPalette::plain()));
        assert!(text.ends_with("SAFE\n"));
        assert!(!text.contains("UNSAFE"));
    }

    #[test]
    fn json_rows_use_null_for_no_solution() {
        let rows = [row(30.0, None)];
        let text = render(|out| render_json(out, &rows[..]));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert!(value[0]["max_speed_mps"].is_null());
        assert!(value[0]["max_speed_kmh"].is_null());
        assert_eq!(value[0]["curve_radius"], 30.0);
    }

    #[test]
    fn near_limit_values_get_warning_color() {
        let palette = ColorPalette::colored();
        assert_eq!(load_color(95.0, 100.0, &palette), palette.warning);
        assert_eq!(load_color(100.0, 100.0, &palette), palette.unstable);
        assert_eq!(load_color(10.0, 100.0, &palette), palette.stable);
    }
}
