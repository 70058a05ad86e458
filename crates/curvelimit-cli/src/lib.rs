//! curvelimit CLI library.
//!
//! This crate provides the command handlers, vehicle parameter resolution,
//! terminal styling and report formatting behind the `curvelimit` binary.

pub mod commands;
pub mod output;
pub mod terminal;
pub mod vehicle_args;

#[cfg(test)]
pub(crate) mod test_helpers;
