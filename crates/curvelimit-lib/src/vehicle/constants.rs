//! Physical constants and defaults shared by the vehicle model and the evaluator.

use std::f64::consts::FRAC_PI_2;

/// Standard gravity in m/s².
pub const GRAVITY: f64 = 9.80665;

/// Specific gas constant for dry air in J/(kg·K).
pub const GAS_CONSTANT: f64 = 287.05;

/// Dimensionless aerodynamic shape factor applied to the projected silhouette.
pub const DRAG_COEFFICIENT: f64 = 0.525;

/// Conversion factor from metres per second to kilometres per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Reference worst-case heavy vehicle: a loaded truck on a hot day in a strong crosswind.
pub(crate) mod reference {
    use super::FRAC_PI_2;

    pub const HEIGHT: f64 = 3.8;
    pub const LENGTH: f64 = 12.0;
    pub const WIDTH: f64 = 2.39;
    pub const WHEELBASE: f64 = 9.0;
    pub const WHEEL_WIDTH: f64 = 0.3;
    pub const MASS: f64 = 12_500.0;
    pub const CURVE_RADIUS: f64 = 30.0;
    pub const AIR_PRESSURE: f64 = 101_330.0;
    pub const TEMPERATURE: f64 = 313.0;
    pub const WIND_VELOCITY: f64 = 25.0;
    pub const WIND_ANGLE: f64 = FRAC_PI_2;
    pub const FRICTION_COEFF: f64 = 0.4;
}
