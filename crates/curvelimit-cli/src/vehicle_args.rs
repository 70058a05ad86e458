//! Vehicle and search parameters shared by every subcommand.
//!
//! Resolution order: built-in reference truck, then the JSON file from
//! `--config` (or `CURVELIMIT_VEHICLE_CONFIG`), then individual flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use curvelimit_lib::{SearchConfig, StabilityConfig, VehicleModel, DEFAULT_STEPS};

#[derive(Args, Debug, Clone, Default)]
pub struct VehicleArgs {
    /// JSON file with vehicle and environment parameters (missing fields use defaults).
    #[arg(long, global = true, env = "CURVELIMIT_VEHICLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Vehicle height in metres.
    #[arg(long, global = true)]
    pub height: Option<f64>,
    /// Vehicle length in metres.
    #[arg(long, global = true)]
    pub length: Option<f64>,
    /// Vehicle width in metres.
    #[arg(long, global = true)]
    pub width: Option<f64>,
    /// Distance between wheel contact points in metres.
    #[arg(long, global = true)]
    pub wheelbase: Option<f64>,
    /// Wheel width in metres.
    #[arg(long, global = true)]
    pub wheel_width: Option<f64>,
    /// Vehicle mass in kilograms.
    #[arg(long, global = true)]
    pub mass: Option<f64>,
    /// Air pressure in pascals.
    #[arg(long, global = true)]
    pub air_pressure: Option<f64>,
    /// Air temperature in kelvin.
    #[arg(long, global = true)]
    pub temperature: Option<f64>,
    /// Ambient wind speed in m/s.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub wind_velocity: Option<f64>,
    /// Ambient wind bearing in degrees.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub wind_angle_deg: Option<f64>,
    /// Static tire friction coefficient.
    #[arg(long, global = true)]
    pub friction: Option<f64>,
}

impl VehicleArgs {
    /// Build the validated vehicle model from defaults, config file and flags.
    pub fn resolve(&self) -> Result<VehicleModel> {
        let mut model = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading vehicle configuration");
                VehicleModel::from_path(path).with_context(|| {
                    format!("failed to load vehicle configuration from {}", path.display())
                })?
            }
            None => VehicleModel::default(),
        };

        let overrides = [
            (self.height, &mut model.height),
            (self.length, &mut model.length),
            (self.width, &mut model.width),
            (self.wheelbase, &mut model.wheelbase),
            (self.wheel_width, &mut model.wheel_width),
            (self.mass, &mut model.mass),
            (self.air_pressure, &mut model.air_pressure),
            (self.temperature, &mut model.temperature),
            (self.wind_velocity, &mut model.wind_velocity),
            (self.wind_angle_deg.map(f64::to_radians), &mut model.wind_angle),
            (self.friction, &mut model.friction_coeff),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }

        model.validate().context("invalid vehicle parameters")?;
        Ok(model)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Time steps per curve traversal.
    #[arg(long, global = true, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,
    /// Bisection stopping width in m/s.
    #[arg(long, global = true, default_value_t = 1e-9)]
    pub tolerance: f64,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            tolerance: 1e-9,
        }
    }
}

impl SearchArgs {
    pub fn search_config(&self) -> Result<SearchConfig> {
        let config = SearchConfig {
            tolerance: self.tolerance,
            stability: self.stability_config(),
            ..SearchConfig::default()
        };
        config.validate().context("invalid search settings")?;
        Ok(config)
    }

    pub fn stability_config(&self) -> StabilityConfig {
        StabilityConfig { steps: self.steps }
    }
}
