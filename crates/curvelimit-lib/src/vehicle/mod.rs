//! Vehicle parameters and physical constants.
//!
//! - [`model`] - Geometry, mass and environment of one scenario
//! - [`constants`] - Physical constants and unit conversions

pub mod constants;
pub mod model;

pub use constants::{DRAG_COEFFICIENT, GAS_CONSTANT, GRAVITY, MPS_TO_KMH};
pub use model::VehicleModel;
