//! Curve traversal simulation and the tip-over / slide-out verdict.
//!
//! For a candidate speed the vehicle is swept from curve entry to the
//! quarter-turn point in equal time steps. At every step the aerodynamic side
//! load from the relative wind is combined with the centripetal load, and the
//! running peaks of lateral tire force and overturning torque are kept. The
//! vehicle exceeds its limits when either peak reaches its threshold:
//!
//! ```text
//! max_torque >= mass * g * (width + wheel_width * cos(theta)) / 2   (tip-over)
//! max_force  >= mass * g * friction_coeff                          (slide-out)
//! ```

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

use crate::aero::{aerodynamic_force, cross_sectional_area, RelativeWind};
use crate::error::{Error, Result};
use crate::vehicle::{VehicleModel, GRAVITY};

/// Number of time steps used to discretise one traversal by default.
pub const DEFAULT_STEPS: usize = 10_000;

/// Resolution of the traversal simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilityConfig {
    /// Number of equal time steps over `[0, time_max)`.
    pub steps: usize,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl StabilityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(Error::invalid("steps", "must be at least 1"));
        }
        Ok(())
    }
}

/// Attitude angles of the vehicle through a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurnGeometry {
    /// Tire steer angle (rad).
    pub theta: f64,
    /// Support point angle (rad).
    pub alpha: f64,
}

impl TurnGeometry {
    /// Derive the tire and support angles for the model's curve radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when `wheelbase / (2 * curve_radius)` exceeds 1,
    /// i.e. the curve is too tight for any tire angle.
    pub fn new(model: &VehicleModel) -> Result<Self> {
        let ratio = model.wheelbase / (2.0 * model.curve_radius);
        if !(-1.0..=1.0).contains(&ratio) {
            return Err(Error::Domain {
                wheelbase: model.wheelbase,
                curve_radius: model.curve_radius,
            });
        }

        let theta = ratio.asin().abs();
        let alpha = ((model.wheel_width * theta.cos())
            / (model.wheelbase * (1.0 + 0.5 * theta.sin())))
        .atan();

        Ok(Self { theta, alpha })
    }
}

/// Which threshold a configuration breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    TipOver,
    SlideOut,
    TipOverAndSlideOut,
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureMode::TipOver => "tip-over",
            FailureMode::SlideOut => "slide-out",
            FailureMode::TipOverAndSlideOut => "tip-over and slide-out",
        };
        f.write_str(label)
    }
}

/// Peaks and thresholds from one traversal at one speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityReport {
    /// Forward speed evaluated (m/s).
    pub velocity: f64,
    pub geometry: TurnGeometry,
    /// Peak lateral tire force over the traversal (N).
    pub max_force: f64,
    /// Peak overturning torque over the traversal (N·m).
    pub max_torque: f64,
    /// Restoring torque of the vehicle's weight about the outer wheel track (N·m).
    pub weight_torque: f64,
    /// Lateral force available before the tires slip (N).
    pub friction_limit: f64,
}

impl StabilityReport {
    pub fn tips_over(&self) -> bool {
        self.max_torque >= self.weight_torque
    }

    pub fn slides_out(&self) -> bool {
        self.max_force >= self.friction_limit
    }

    /// Either failure mode alone is disqualifying.
    pub fn exceeds_limits(&self) -> bool {
        self.tips_over() || self.slides_out()
    }

    pub fn failure_mode(&self) -> Option<FailureMode> {
        match (self.tips_over(), self.slides_out()) {
            (true, true) => Some(FailureMode::TipOverAndSlideOut),
            (true, false) => Some(FailureMode::TipOver),
            (false, true) => Some(FailureMode::SlideOut),
            (false, false) => None,
        }
    }
}

/// Simulate the traversal at `velocity` and report peaks against thresholds.
///
/// Sample `i` sits at heading `phi_i = (pi/2 - theta) * i / steps`, which is
/// where the vehicle is after `i` equal time steps of `[0, time_max)`. The
/// heading is taken from the step index rather than from `velocity * t`, so a
/// traversal time that overflows at vanishing speeds never reaches the loads.
///
/// A single sample at curve entry is evaluated when there is nothing to sweep:
/// a `velocity` of zero (the static case), or a radius of exactly half the
/// wheelbase, where the tires already steer a quarter turn (theta = pi/2).
/// The verdict at that radius reflects the loads at curve entry; it is not
/// reported as unbounded.
///
/// A load that overflows (`inf - inf` at extreme speeds) counts as infinite,
/// so the peaks are never NaN and such a speed always exceeds the limits.
///
/// # Errors
///
/// * [`Error::InvalidParameter`] for an invalid model, a negative or
///   non-finite velocity, or a zero step count.
/// * [`Error::Domain`] when the radius is below half the wheelbase.
pub fn evaluate(
    model: &VehicleModel,
    velocity: f64,
    config: &StabilityConfig,
) -> Result<StabilityReport> {
    model.validate()?;
    config.validate()?;
    if !velocity.is_finite() || velocity < 0.0 {
        return Err(Error::invalid(
            "velocity",
            format!("must be finite and non-negative, got {velocity}"),
        ));
    }

    let geometry = TurnGeometry::new(model)?;
    let TurnGeometry { theta, alpha } = geometry;

    let centripetal = model.mass * velocity * velocity / (model.curve_radius + model.width);
    let modified_centripetal = centripetal * alpha.cos();

    let sweep = FRAC_PI_2 - theta;
    let steps = if velocity > 0.0 && sweep > 0.0 {
        config.steps
    } else {
        1
    };

    let mut max_force: f64 = 0.0;
    let mut max_torque: f64 = 0.0;

    for step in 0..steps {
        let phi = sweep * step as f64 / steps as f64;

        let wind = RelativeWind::new(model, velocity, phi + theta);
        let incidence = wind.bearing - phi;
        let area = cross_sectional_area(model, incidence);
        let aero = aerodynamic_force(model, area, wind.speed);

        let front = saturate(centripetal + aero * (incidence - theta).sin());
        let rear = saturate(centripetal * theta.cos() + aero * incidence.sin());
        let torque = saturate(
            ((model.height / 2.0) * (aero * (incidence - alpha).sin() + modified_centripetal))
                .abs(),
        );

        max_force = max_force.max(front).max(rear);
        max_torque = max_torque.max(torque);
    }

    let weight_torque =
        model.mass * GRAVITY * (model.width + model.wheel_width * theta.cos()) / 2.0;
    let friction_limit = model.mass * GRAVITY * model.friction_coeff;

    Ok(StabilityReport {
        velocity,
        geometry,
        max_force,
        max_torque,
        weight_torque,
        friction_limit,
    })
}

// NaN only arises from opposing infinite terms.
fn saturate(load: f64) -> f64 {
    if load.is_nan() {
        f64::INFINITY
    } else {
        load
    }
}

/// Whether the vehicle tips over or slides out at `velocity` (default resolution).
pub fn exceeds_limits(model: &VehicleModel, velocity: f64) -> Result<bool> {
    evaluate(model, velocity, &StabilityConfig::default()).map(|report| report.exceeds_limits())
}
