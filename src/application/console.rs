//! Console dispatcher: one input line in, one `CommandResult` out.

use tracing::{debug, instrument};

use crate::domain::{CommandResult, CommandTree, ConsoleError, Scene};

/// Split a raw line on whitespace runs. No quoting, no escaping.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Resolves input lines against a frozen command tree.
///
/// The tree is read-only, so a `Console` can be shared across threads; the
/// scene handle is borrowed mutably for the duration of a single `run`.
pub struct Console<S> {
    tree: CommandTree<S>,
}

impl<S: Scene> Console<S> {
    pub fn new(tree: CommandTree<S>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &CommandTree<S> {
        &self.tree
    }

    /// Dispatch one line against `scene`.
    ///
    /// Matched commands receive the last `arity` tokens of the whole line,
    /// whatever sits between the command path and that suffix is ignored.
    #[instrument(level = "debug", skip(self, scene))]
    pub fn run(&self, line: &str, scene: &mut S) -> CommandResult {
        if !scene.is_initialized() {
            return ConsoleError::UninitializedScene.into();
        }

        let tokens = tokenize(line);
        let resolution = self.tree.resolve(&tokens);

        let Some(command) = resolution.command else {
            debug!("no top-level command matches");
            return ConsoleError::UnknownCommand.into();
        };
        let Some(arity) = command.arity() else {
            debug!(command = command.name(), "group node is not invocable");
            return ConsoleError::UnknownCommand.into();
        };

        let available = tokens.len() - resolution.depth;
        if available < arity {
            debug!(command = command.name(), arity, available, "missing arguments");
            return ConsoleError::MissingArguments.into();
        }

        let args = &tokens[tokens.len() - arity..];
        debug!(command = command.name(), ?args, "invoking action");
        command
            .invoke(scene, args)
            .unwrap_or_else(|| ConsoleError::UnknownCommand.into())
    }
}

impl<S> std::fmt::Debug for Console<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").field("tree", &self.tree).finish()
    }
}
