//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Outcome taxonomy of a failed dispatch.
///
/// The `Display` text is the message shown to the user, so these strings are
/// part of the console's observable behavior.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Scene has not been initialized!")]
    UninitializedScene,

    #[error("Unknown command!")]
    UnknownCommand,

    #[error("Arguments expected!")]
    MissingArguments,

    #[error("Arguments are invalid!")]
    InvalidArguments,

    #[error("Cannot find the node specified!")]
    TargetNotFound,
}

/// Errors raised while freezing a command tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("command name must not be empty (under '{parent}')")]
    EmptyName { parent: String },

    #[error("command name contains whitespace: '{name}'")]
    WhitespaceInName { name: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
