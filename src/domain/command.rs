//! Command nodes and dispatch results

use std::fmt;

use crate::domain::error::ConsoleError;

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Side effect succeeded, nothing to show.
    Ok,
    /// Succeeded and produced human-readable text.
    Output(String),
    /// Failed; the message is meant for the user.
    Error(String),
}

impl CommandResult {
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True when this is the error result produced by `err`.
    pub fn is(&self, err: ConsoleError) -> bool {
        match self {
            Self::Error(message) => *message == err.to_string(),
            _ => false,
        }
    }
}

impl From<ConsoleError> for CommandResult {
    fn from(err: ConsoleError) -> Self {
        Self::Error(err.to_string())
    }
}

impl From<Result<CommandResult, ConsoleError>> for CommandResult {
    fn from(result: Result<CommandResult, ConsoleError>) -> Self {
        result.unwrap_or_else(CommandResult::from)
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Output(text) => write!(f, "{}", text),
            Self::Error(message) => write!(f, "{}", message),
        }
    }
}

/// Callback invoked with the scene handle and exactly `arity` trailing tokens.
pub type Action<S> = Box<dyn Fn(&mut S, &[&str]) -> CommandResult + Send + Sync>;

/// A named node of the dispatch tree.
///
/// A command either carries an action together with its required argument
/// count, or it is a pure group that must be followed by a child token.
pub struct Command<S> {
    name: String,
    arity: Option<usize>,
    children: Vec<Command<S>>,
    action: Option<Action<S>>,
}

impl<S> Command<S> {
    /// Directly invocable command taking exactly `arity` trailing tokens.
    pub fn new<F, R>(name: impl Into<String>, arity: usize, action: F) -> Self
    where
        S: 'static,
        F: Fn(&mut S, &[&str]) -> R + Send + Sync + 'static,
        R: Into<CommandResult>,
    {
        Self {
            name: name.into(),
            arity: Some(arity),
            children: Vec::new(),
            action: Some(Box::new(move |scene: &mut S, args: &[&str]| -> CommandResult {
                action(scene, args).into()
            })),
        }
    }

    /// Group node without an action of its own.
    pub fn group(name: impl Into<String>, children: Vec<Command<S>>) -> Self {
        Self {
            name: name.into(),
            arity: None,
            children,
            action: None,
        }
    }

    /// Attach subcommands to an actionable command at construction time.
    pub fn with_children(mut self, children: Vec<Command<S>>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required trailing argument count; `None` for group nodes.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub fn children(&self) -> &[Command<S>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child whose name equals `token`.
    pub fn child(&self, token: &str) -> Option<&Command<S>> {
        find_by_name(&self.children, token)
    }

    /// Invoke the action, or `None` for group nodes.
    pub(crate) fn invoke(&self, scene: &mut S, args: &[&str]) -> Option<CommandResult> {
        self.action.as_ref().map(|action| action(scene, args))
    }
}

impl<S> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("children", &self.children)
            .finish()
    }
}

impl<S> fmt::Display for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity {
            Some(n) => write!(f, "{} ({})", self.name, n),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Left-to-right linear search; earlier registrations shadow later ones.
pub(crate) fn find_by_name<'a, S>(commands: &'a [Command<S>], token: &str) -> Option<&'a Command<S>> {
    commands.iter().find(|cmd| cmd.name == token)
}
