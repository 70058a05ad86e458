// Test utilities used across `curvelimit-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use curvelimit_lib::{SafeSpeed, StabilityReport, SweepRow, TurnGeometry, MPS_TO_KMH};

/// Sweep row for `radius` with an optional speed in m/s.
pub fn row(radius: f64, speed_mps: Option<f64>) -> SweepRow {
    let outcome = match speed_mps {
        Some(speed) => SafeSpeed::Limit(speed),
        None => SafeSpeed::NoSolution,
    };
    SweepRow {
        curve_radius: radius,
        max_speed_mps: outcome,
        max_speed_kmh: speed_mps.map(|speed| speed * MPS_TO_KMH),
    }
}

/// Report with reference-truck thresholds and the given peaks.
pub fn report_with(velocity: f64, max_force: f64, max_torque: f64) -> StabilityReport {
    StabilityReport {
        velocity,
        geometry: TurnGeometry {
            theta: 0.150_568,
            alpha: 0.030_647,
        },
        max_force,
        max_torque,
        weight_torque: 164_666.267,
        friction_limit: 49_033.25,
    }
}
