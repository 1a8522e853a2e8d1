//! CLI layer: argument parsing and the line-reading host loop

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{execute_command, run_lines};
pub use error::{CliError, CliResult};
