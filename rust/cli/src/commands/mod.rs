//! Command handler modules for the pokerhud CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, taking its
//! output streams as `&mut dyn Write` so tests can capture them.

mod cfg;
mod import;

pub use cfg::handle_cfg_command;
pub use import::handle_import_command;
