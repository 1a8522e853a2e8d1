//! Command tree: ordered builder and the frozen forest it produces.

use std::collections::HashSet;
use std::fmt;

use termtree::Tree;
use tracing::{instrument, warn};

use crate::domain::command::{find_by_name, Command};
use crate::domain::error::{TreeError, TreeResult};

/// Collects top-level commands in registration order.
///
/// Consumed by [`CommandTreeBuilder::build`]; a new tree needs a new builder.
pub struct CommandTreeBuilder<S> {
    commands: Vec<Command<S>>,
}

impl<S> Default for CommandTreeBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CommandTreeBuilder<S> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a top-level command. Names are not checked for uniqueness:
    /// a later duplicate is shadowed by the earlier one.
    pub fn add_command(mut self, command: Command<S>) -> Self {
        self.commands.push(command);
        self
    }

    /// Number of top-level commands registered so far.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render what has been registered so far.
    pub fn render(&self) -> String {
        render_forest(&self.commands)
    }

    /// Freeze into an immutable tree.
    #[instrument(level = "debug", skip(self), fields(commands = self.commands.len()))]
    pub fn build(self) -> TreeResult<CommandTree<S>> {
        validate_level(&self.commands, "<root>")?;
        Ok(CommandTree {
            roots: self.commands,
        })
    }
}

fn validate_level<S>(commands: &[Command<S>], parent: &str) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for cmd in commands {
        if cmd.name().is_empty() {
            return Err(TreeError::EmptyName {
                parent: parent.to_string(),
            });
        }
        if cmd.name().chars().any(char::is_whitespace) {
            return Err(TreeError::WhitespaceInName {
                name: cmd.name().to_string(),
            });
        }
        if !seen.insert(cmd.name()) {
            warn!(parent, name = cmd.name(), "command shadowed by earlier sibling");
        }
        validate_level(cmd.children(), cmd.name())?;
    }
    Ok(())
}

/// Where greedy descent stopped for a token sequence.
#[derive(Debug)]
pub struct Resolution<'a, S> {
    /// Deepest command matched, `None` if the first token matched nothing.
    pub command: Option<&'a Command<S>>,
    /// Number of leading tokens consumed by name matching.
    pub depth: usize,
}

/// Immutable forest of commands with a virtual root.
pub struct CommandTree<S> {
    roots: Vec<Command<S>>,
}

impl<S> CommandTree<S> {
    /// Top-level commands, i.e. the children of the virtual root.
    pub fn roots(&self) -> &[Command<S>] {
        &self.roots
    }

    /// Children of `parent`, or of the virtual root when `None`.
    pub fn children_of<'a>(&'a self, parent: Option<&'a Command<S>>) -> &'a [Command<S>] {
        match parent {
            Some(cmd) => cmd.children(),
            None => &self.roots,
        }
    }

    /// Look up a direct child of `parent` by name (first match wins).
    pub fn child<'a>(&'a self, parent: Option<&'a Command<S>>, name: &str) -> Option<&'a Command<S>> {
        find_by_name(self.children_of(parent), name)
    }

    /// Follow an exact path of names from the virtual root.
    pub fn find(&self, path: &[&str]) -> Option<&Command<S>> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.child(None, first)?, |cmd, name| cmd.child(name))
    }

    /// Greedy descent: each token that names a child of the current command
    /// is consumed; the first token that does not stops the walk for good.
    #[instrument(level = "trace", skip(self))]
    pub fn resolve(&self, tokens: &[&str]) -> Resolution<'_, S> {
        let mut current: Option<&Command<S>> = None;
        let mut depth = 0;
        for token in tokens {
            match self.child(current, token) {
                Some(cmd) => {
                    current = Some(cmd);
                    depth += 1;
                }
                None => break,
            }
        }
        Resolution {
            command: current,
            depth,
        }
    }

    /// Pre-order walk yielding each command with its depth (top level = 0).
    pub fn iter(&self) -> TreeIterator<'_, S> {
        TreeIterator::new(self)
    }

    /// Total number of commands in the forest.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<S> fmt::Debug for CommandTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("roots", &self.roots)
            .finish()
    }
}

impl<S> fmt::Display for CommandTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_forest(&self.roots))
    }
}

pub struct TreeIterator<'a, S> {
    stack: Vec<(usize, &'a Command<S>)>,
}

impl<'a, S> TreeIterator<'a, S> {
    fn new(tree: &'a CommandTree<S>) -> Self {
        // Reverse so the first registered command is visited first
        let stack = tree.roots.iter().rev().map(|cmd| (0, cmd)).collect();
        Self { stack }
    }
}

impl<'a, S> Iterator for TreeIterator<'a, S> {
    type Item = (usize, &'a Command<S>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, cmd) = self.stack.pop()?;
        for child in cmd.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, cmd))
    }
}

fn to_termtree<S>(cmd: &Command<S>) -> Tree<String> {
    Tree::new(cmd.to_string()).with_leaves(cmd.children().iter().map(to_termtree))
}

/// Render a forest, one `termtree` block per top-level command.
pub(crate) fn render_forest<S>(commands: &[Command<S>]) -> String {
    commands
        .iter()
        .map(|cmd| to_termtree(cmd).to_string())
        .collect::<String>()
}
