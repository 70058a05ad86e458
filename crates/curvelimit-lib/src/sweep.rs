//! Safe speed across a list of curve radii.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::search::{max_safe_speed_with, SafeSpeed, SearchConfig};
use crate::vehicle::VehicleModel;

/// Radii (m) of the reference report, from hairpin to open highway curve.
pub const REFERENCE_RADII: [f64; 8] = [15.0, 30.0, 50.0, 80.0, 120.0, 230.0, 380.0, 570.0];

/// Result for one radius of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    /// Curve radius (m).
    pub curve_radius: f64,
    /// Maximum safe speed (m/s), `null` when no speed is safe.
    pub max_speed_mps: SafeSpeed,
    /// Maximum safe speed (km/h), `null` when no speed is safe.
    pub max_speed_kmh: Option<f64>,
}

impl SweepRow {
    fn new(curve_radius: f64, outcome: SafeSpeed) -> Self {
        Self {
            curve_radius,
            max_speed_mps: outcome,
            max_speed_kmh: outcome.kilometers_per_hour(),
        }
    }
}

/// Run the safe speed search on `base` placed on each radius in turn.
///
/// Rows come back in the order of `radii`. The first invalid radius aborts the
/// sweep with its error; infeasible radii yield [`SafeSpeed::NoSolution`] rows.
pub fn sweep_radii(
    base: &VehicleModel,
    radii: &[f64],
    config: &SearchConfig,
) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(radii.len());

    for &radius in radii {
        let model = base.with_curve_radius(radius);
        let outcome = max_safe_speed_with(&model, config)?;
        match outcome {
            SafeSpeed::Limit(speed) => debug!(radius, speed, "radius evaluated"),
            SafeSpeed::NoSolution => warn!(radius, "no stable speed for radius"),
        }
        rows.push(SweepRow::new(radius, outcome));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::stability::StabilityConfig;

    fn coarse() -> SearchConfig {
        SearchConfig {
            tolerance: 1e-3,
            stability: StabilityConfig { steps: 200 },
            ..SearchConfig::default()
        }
    }

    #[test]
    fn preserves_radius_order() {
        let radii = [120.0, 15.0, 50.0];
        let rows = sweep_radii(&VehicleModel::default(), &radii, &coarse()).expect("sweep");
        let seen: Vec<f64> = rows.iter().map(|row| row.curve_radius).collect();
        assert_eq!(seen, radii);
    }

    #[test]
    fn wider_curves_allow_higher_speeds() {
        let rows =
            sweep_radii(&VehicleModel::default(), &REFERENCE_RADII, &coarse()).expect("sweep");
        let speeds: Vec<f64> = rows
            .iter()
            .map(|row| row.max_speed_mps.meters_per_second().expect("feasible"))
            .collect();
        assert!(speeds.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tight_radius_aborts_sweep() {
        let err = sweep_radii(&VehicleModel::default(), &[30.0, 3.0], &coarse())
            .expect_err("domain error");
        assert!(matches!(err, Error::Domain { .. }));
    }

    #[test]
    fn empty_radius_list_yields_no_rows() {
        let rows = sweep_radii(&VehicleModel::default(), &[], &coarse()).expect("sweep");
        assert!(rows.is_empty());
    }
}
