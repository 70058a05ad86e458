//! Vehicle geometry, mass, and operating environment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{reference, GAS_CONSTANT};

/// Geometric, mass, and environmental parameters of one vehicle scenario.
///
/// All values are SI units. A model is constructed once and then cloned per
/// curve radius through [`VehicleModel::with_curve_radius`]; nothing in the
/// library mutates it. Missing fields in a JSON document fall back to the
/// reference worst-case values of [`VehicleModel::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleModel {
    /// Vehicle height (m).
    pub height: f64,
    /// Vehicle length (m).
    pub length: f64,
    /// Vehicle width (m).
    pub width: f64,
    /// Distance between front and rear wheel contact points (m).
    pub wheelbase: f64,
    /// Tire contact width (m).
    pub wheel_width: f64,
    /// Vehicle mass (kg).
    pub mass: f64,
    /// Radius of the curve being traversed (m).
    pub curve_radius: f64,
    /// Ambient air pressure (Pa).
    pub air_pressure: f64,
    /// Ambient air temperature (K).
    pub temperature: f64,
    /// Ambient wind speed (m/s).
    pub wind_velocity: f64,
    /// Ambient wind bearing (rad).
    pub wind_angle: f64,
    /// Static tire friction coefficient.
    pub friction_coeff: f64,
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self {
            height: reference::HEIGHT,
            length: reference::LENGTH,
            width: reference::WIDTH,
            wheelbase: reference::WHEELBASE,
            wheel_width: reference::WHEEL_WIDTH,
            mass: reference::MASS,
            curve_radius: reference::CURVE_RADIUS,
            air_pressure: reference::AIR_PRESSURE,
            temperature: reference::TEMPERATURE,
            wind_velocity: reference::WIND_VELOCITY,
            wind_angle: reference::WIND_ANGLE,
            friction_coeff: reference::FRICTION_COEFF,
        }
    }
}

impl VehicleModel {
    /// Load a model from a JSON file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Parse a model from an in-memory JSON document and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let model: Self =
            serde_json::from_str(raw).map_err(|source| Error::ConfigParse { path: None, source })?;
        model.validate()?;
        Ok(model)
    }

    /// Copy of this model placed on a curve of the given radius.
    #[must_use]
    pub fn with_curve_radius(&self, curve_radius: f64) -> Self {
        Self {
            curve_radius,
            ..*self
        }
    }

    /// Air density (kg/m³) from the ideal-gas relation.
    pub fn air_density(&self) -> f64 {
        self.air_pressure / (GAS_CONSTANT * self.temperature)
    }

    /// Reject values the evaluator cannot work with.
    ///
    /// Geometry, mass, radius, temperature and friction must be finite and
    /// strictly positive. Air pressure may be zero (no aerodynamic loading).
    /// Wind speed and bearing only need to be finite. The radius-versus-wheelbase
    /// domain is checked separately by the evaluator so that it surfaces as
    /// [`Error::Domain`].
    pub fn validate(&self) -> Result<()> {
        let positive = [
            (self.height, "height"),
            (self.length, "length"),
            (self.width, "width"),
            (self.wheelbase, "wheelbase"),
            (self.wheel_width, "wheel_width"),
            (self.mass, "mass"),
            (self.curve_radius, "curve_radius"),
            (self.temperature, "temperature"),
            (self.friction_coeff, "friction_coeff"),
        ];

        for (value, field) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(
                    field,
                    format!("must be a finite positive number, got {value}"),
                ));
            }
        }

        if !self.air_pressure.is_finite() || self.air_pressure < 0.0 {
            return Err(Error::invalid(
                "air_pressure",
                format!(
                    "must be finite and non-negative, got {}",
                    self.air_pressure
                ),
            ));
        }

        for (value, field) in [
            (self.wind_velocity, "wind_velocity"),
            (self.wind_angle, "wind_angle"),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(field, format!("must be finite, got {value}")));
            }
        }

        Ok(())
    }
}
