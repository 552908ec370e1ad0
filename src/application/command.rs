//! # Leaf Commands
//!
//! The contract every executable `/points <name>` command implements, and the
//! uniform view over leaves and sub-handlers used by help listings.

use crate::application::context::CommandContext;
use crate::application::handler::CommandHandler;
use crate::domain::traits::CommandSender;
use crate::domain::types::CommandResult;

pub trait PointsCommand {
    fn name(&self) -> &str;

    /// One-line summary shown in help listings.
    fn description(&self) -> &str {
        ""
    }

    /// Argument synopsis shown in help listings, e.g. `<player> <amount>`.
    fn usage(&self) -> &str {
        ""
    }

    /// Permission node required to run the command. `None` means everyone.
    fn permission(&self) -> Option<&str> {
        None
    }

    fn has_permission(&self, sender: &dyn CommandSender) -> bool {
        self.permission()
            .is_none_or(|node| sender.has_permission(node))
    }

    /// Runs the command. `args` excludes the command's own name.
    fn execute(&self, ctx: &CommandContext<'_>, sender: &dyn CommandSender, args: &[String])
    -> CommandResult;

    /// Suggestions for the last element of `args`.
    fn tab_complete(
        &self,
        _ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        _args: &[String],
    ) -> Vec<String> {
        Vec::new()
    }
}

/// Either kind of registration, viewed by name.
#[derive(Clone, Copy)]
pub enum Executable<'a> {
    Handler(&'a CommandHandler),
    Command {
        label: &'a str,
        command: &'a dyn PointsCommand,
    },
}

impl<'a> Executable<'a> {
    /// The name the executable is reachable under.
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Handler(handler) => handler.name(),
            Self::Command { label, .. } => label,
        }
    }

    pub fn description(&self) -> &'a str {
        match *self {
            Self::Handler(handler) => handler.description(),
            Self::Command { command, .. } => command.description(),
        }
    }

    pub fn usage(&self) -> &'a str {
        match *self {
            Self::Handler(_) => "",
            Self::Command { command, .. } => command.usage(),
        }
    }

    pub fn has_permission(&self, sender: &dyn CommandSender) -> bool {
        match *self {
            Self::Handler(handler) => handler.has_permission(sender),
            Self::Command { command, .. } => command.has_permission(sender),
        }
    }

    pub fn is_handler(&self) -> bool {
        matches!(self, Self::Handler(_))
    }
}

/// Keeps only the candidates starting with `partial`, ignoring case.
pub fn partial_matches<I, S>(partial: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let partial = partial.to_lowercase();
    candidates
        .into_iter()
        .filter(|c| c.as_ref().to_lowercase().starts_with(&partial))
        .map(|c| c.as_ref().to_string())
        .collect()
}
