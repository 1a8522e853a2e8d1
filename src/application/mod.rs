//! Application layer: dispatcher and the standard command catalog
//!
//! This layer orchestrates domain logic against any scene implementing the domain traits.

pub mod args;
pub mod catalog;
pub mod console;
pub mod error;

pub use catalog::standard_commands;
pub use console::{tokenize, Console};
pub use error::{ApplicationError, ApplicationResult};

use crate::config::Settings;
use crate::domain::SceneGraph;

/// Build a console carrying the standard command catalog.
pub fn standard_console<S: SceneGraph + 'static>(settings: &Settings) -> ApplicationResult<Console<S>> {
    let tree = standard_commands(settings).build()?;
    Ok(Console::new(tree))
}
