//! Command-line front end: interactive menu and one-shot subcommands.

mod args;
mod commands;
mod errors;
mod menu;

pub use args::{Cli, Command};
pub use commands::{init_tracing, run};
pub use errors::{CliError, CliResult};
pub use menu::Menu;
