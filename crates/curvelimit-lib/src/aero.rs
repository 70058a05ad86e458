//! Aerodynamic side loading from the relative wind.
//!
//! The relative wind combines the vehicle's direction of travel with the
//! ambient wind vector. Its magnitude and bearing drive a drag-style force on
//! the silhouette the vehicle presents to that wind.

use crate::vehicle::{VehicleModel, DRAG_COEFFICIENT};

/// Relative wind seen by the vehicle at one instant of the traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeWind {
    /// Magnitude of the relative wind (m/s).
    pub speed: f64,
    /// Bearing of the relative wind, `atan2(horizontal, vertical)` (rad).
    pub bearing: f64,
}

impl RelativeWind {
    /// Combine travel along `heading` at `velocity` with the model's ambient wind.
    pub fn new(model: &VehicleModel, velocity: f64, heading: f64) -> Self {
        let vertical = velocity * heading.cos() + model.wind_velocity * model.wind_angle.cos();
        let horizontal = velocity * heading.sin() + model.wind_velocity * model.wind_angle.sin();

        Self {
            speed: vertical.hypot(horizontal),
            bearing: horizontal.atan2(vertical),
        }
    }
}

/// Projected silhouette (m²) facing a wind that meets the body at `incidence` radians.
pub fn cross_sectional_area(model: &VehicleModel, incidence: f64) -> f64 {
    model.height
        * ((model.width * incidence.cos()).abs() + (model.length * incidence.sin()).abs())
}

/// Drag-style side force (N) on `area` for a relative wind of `speed`.
///
/// Air density comes from the ideal-gas relation on the model's pressure and
/// temperature.
pub fn aerodynamic_force(model: &VehicleModel, area: f64, speed: f64) -> f64 {
    DRAG_COEFFICIENT * model.air_density() * area * speed * speed
}
