// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, resolves the
// vehicle model and search settings, and dispatches to these handlers.

pub mod check;
pub mod defaults;
pub mod report;
pub mod speed;
