//! # Help Command
//!
//! Handles `/points help` and the no-argument listings of every handler.
//! Only executables the sender may use are listed.

use crate::application::command::PointsCommand;
use crate::application::context::CommandContext;
use crate::application::handler::CommandHandler;
use crate::domain::traits::CommandSender;
use crate::domain::types::CommandResult;
use crate::strings::messages;

pub struct HelpCommand;

impl PointsCommand for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Displays the help menu"
    }

    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _args: &[String],
    ) -> CommandResult {
        send_listing(ctx, sender, ctx.root, None);
        Ok(())
    }
}

/// Sends the header and one line per permitted executable of `handler`.
/// `path` is the sub-command prefix for nested handlers (e.g. `debug`).
pub fn send_listing(
    ctx: &CommandContext<'_>,
    sender: &dyn CommandSender,
    handler: &CommandHandler,
    path: Option<&str>,
) {
    let messenger = ctx.messenger();
    let permitted: Vec<_> = handler
        .executables()
        .into_iter()
        .filter(|e| e.has_permission(sender))
        .collect();

    if permitted.is_empty() {
        messenger.send_message(sender, messages::HELP_EMPTY, &[]);
        return;
    }

    messenger.send_message(sender, messages::HELP_HEADER, &[]);
    for executable in permitted {
        let subcmd = match path {
            Some(path) => format!("{path} {}", executable.name()),
            None => executable.name().to_string(),
        };
        let usage = executable.usage();
        let desc = executable.description();

        if usage.is_empty() {
            messenger.send_simple_message(
                sender,
                messages::HELP_ENTRY_NO_ARGS,
                &[("cmd", ctx.label), ("subcmd", subcmd.as_str()), ("desc", desc)],
            );
        } else {
            messenger.send_simple_message(
                sender,
                messages::HELP_ENTRY,
                &[
                    ("cmd", ctx.label),
                    ("subcmd", subcmd.as_str()),
                    ("args", usage),
                    ("desc", desc),
                ],
            );
        }
    }
}
