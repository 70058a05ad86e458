//! Maximum safe speed by bisection over the stability verdict.
//!
//! The "exceeds limits" predicate is assumed monotone in speed: once the
//! vehicle is unstable it stays unstable at every higher speed. Under that
//! assumption halving `[lower, upper)` converges on the stability boundary.

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::stability::{evaluate, StabilityConfig};
use crate::vehicle::{VehicleModel, MPS_TO_KMH};

/// Bisection bounds and tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Lower speed bound (m/s).
    pub lower: f64,
    /// Upper speed bound (m/s); treated as unstable.
    pub upper: f64,
    /// Stop once the bracket is no wider than this (m/s).
    pub tolerance: f64,
    pub stability: StabilityConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 10_000.0,
            tolerance: 1e-9,
            stability: StabilityConfig::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() || self.lower < 0.0 {
            return Err(Error::invalid(
                "lower",
                format!("must be finite and non-negative, got {}", self.lower),
            ));
        }
        if !self.upper.is_finite() || self.upper <= self.lower {
            return Err(Error::invalid(
                "upper",
                format!(
                    "must be finite and above the lower bound {}, got {}",
                    self.lower, self.upper
                ),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::invalid(
                "tolerance",
                format!("must be a finite positive number, got {}", self.tolerance),
            ));
        }
        self.stability.validate()
    }
}

/// Outcome of a safe speed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SafeSpeed {
    /// Highest stable speed found (m/s).
    Limit(f64),
    /// Unstable even at the lower bound; no speed is safe on this curve.
    NoSolution,
}

impl SafeSpeed {
    pub fn meters_per_second(&self) -> Option<f64> {
        match self {
            SafeSpeed::Limit(speed) => Some(*speed),
            SafeSpeed::NoSolution => None,
        }
    }

    pub fn kilometers_per_hour(&self) -> Option<f64> {
        self.meters_per_second().map(|speed| speed * MPS_TO_KMH)
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, SafeSpeed::Limit(_))
    }
}

impl Serialize for SafeSpeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.meters_per_second().serialize(serializer)
    }
}

/// Maximum safe speed with the default bounds, tolerance and resolution.
pub fn max_safe_speed(model: &VehicleModel) -> Result<SafeSpeed> {
    max_safe_speed_with(model, &SearchConfig::default())
}

/// Maximum safe speed with explicit search settings.
pub fn max_safe_speed_with(model: &VehicleModel, config: &SearchConfig) -> Result<SafeSpeed> {
    max_safe_speed_until(model, config, |_| true)
}

/// Maximum safe speed with a cooperative cancellation check.
///
/// `should_continue` is called with the number of completed bisection
/// iterations before each new one; returning `false` aborts the search with
/// [`Error::Cancelled`]. The inner traversal simulation is never interrupted.
pub fn max_safe_speed_until<F>(
    model: &VehicleModel,
    config: &SearchConfig,
    mut should_continue: F,
) -> Result<SafeSpeed>
where
    F: FnMut(u32) -> bool,
{
    config.validate()?;

    let mut lower = config.lower;
    let mut upper = config.upper;
    let mut iterations = 0u32;

    while upper - lower > config.tolerance {
        if !should_continue(iterations) {
            return Err(Error::Cancelled { iterations });
        }

        let mid = (lower + upper) / 2.0;
        let unstable = evaluate(model, mid, &config.stability)?.exceeds_limits();
        trace!(iteration = iterations, mid, unstable, "bisection step");
        if unstable {
            upper = mid;
        } else {
            lower = mid;
        }
        iterations += 1;
    }

    // Converging on the lower bound is ambiguous: it is only a valid answer if
    // the vehicle is actually stable there.
    let outcome = if evaluate(model, lower, &config.stability)?.exceeds_limits() {
        SafeSpeed::NoSolution
    } else {
        SafeSpeed::Limit(lower)
    };

    debug!(
        curve_radius = model.curve_radius,
        iterations,
        ?outcome,
        "safe speed search converged"
    );

    Ok(outcome)
}
