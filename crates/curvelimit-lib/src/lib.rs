//! curvelimit library entry points.
//!
//! This crate evaluates whether a large vehicle tips over or slides out while
//! traversing a curve in a crosswind, and searches for the highest speed at
//! which it stays within both limits. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!
//! ```
//! use curvelimit_lib::{max_safe_speed, SafeSpeed, VehicleModel};
//!
//! let model = VehicleModel::default().with_curve_radius(120.0);
//! match max_safe_speed(&model).unwrap() {
//!     SafeSpeed::Limit(speed) => assert!(speed > 0.0),
//!     SafeSpeed::NoSolution => unreachable!("reference truck is stable at 120 m"),
//! }
//! ```

#![deny(warnings)]

pub mod aero;
pub mod error;
pub mod search;
pub mod stability;
pub mod sweep;
pub mod vehicle;

pub use error::{Error, Result};
pub use search::{
    max_safe_speed, max_safe_speed_until, max_safe_speed_with, SafeSpeed, SearchConfig,
};
pub use stability::{
    evaluate, exceeds_limits, FailureMode, StabilityConfig, StabilityReport, TurnGeometry,
    DEFAULT_STEPS,
};
pub use sweep::{sweep_radii, SweepRow, REFERENCE_RADII};
pub use vehicle::{VehicleModel, DRAG_COEFFICIENT, GAS_CONSTANT, GRAVITY, MPS_TO_KMH};
