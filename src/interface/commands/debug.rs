//! # Debug Commands
//!
//! The `/points debug` sub-handler: inspect the command tree and the sender's permissions.

use crate::application::command::{Executable, PointsCommand, partial_matches};
use crate::application::context::CommandContext;
use crate::application::handler::CommandHandler;
use crate::domain::traits::CommandSender;
use crate::domain::types::{CommandResult, arg};
use crate::interface::commands::PERM_DEBUG;
use crate::interface::commands::hooks::SubHandlerHooks;
use crate::strings::messages;

pub fn handler() -> CommandHandler {
    let mut debug = CommandHandler::new("debug", SubHandlerHooks::new().with_permission(PERM_DEBUG))
        .with_description("Inspect commands and permissions");
    debug.register_command("tree", Box::new(TreeCommand));
    debug.register_command("perm", Box::new(PermCommand));
    debug
}

/// `/points debug tree`
pub struct TreeCommand;

impl PointsCommand for TreeCommand {
    fn name(&self) -> &str {
        "tree"
    }

    fn description(&self) -> &str {
        "Shows every command you can use"
    }

    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _args: &[String],
    ) -> CommandResult {
        ctx.messenger()
            .send_message(sender, messages::DEBUG_TREE_HEADER, &[("cmd", ctx.label)]);
        send_tree(ctx, sender, ctx.root, 1);
        Ok(())
    }
}

fn send_tree(
    ctx: &CommandContext<'_>,
    sender: &dyn CommandSender,
    handler: &CommandHandler,
    depth: usize,
) {
    let indent = "  ".repeat(depth);
    for executable in handler.executables() {
        if !executable.has_permission(sender) {
            continue;
        }
        ctx.messenger().send_simple_message(
            sender,
            messages::DEBUG_TREE_ENTRY,
            &[("indent", indent.as_str()), ("name", executable.name())],
        );
        if let Executable::Handler(child) = executable {
            send_tree(ctx, sender, child, depth + 1);
        }
    }
}

/// `/points debug perm <node>`
pub struct PermCommand;

impl PointsCommand for PermCommand {
    fn name(&self) -> &str {
        "perm"
    }

    fn description(&self) -> &str {
        "Checks whether you hold a permission node"
    }

    fn usage(&self) -> &str {
        "<node>"
    }

    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        args: &[String],
    ) -> CommandResult {
        let node = arg(args, 0)?;
        let key = if sender.has_permission(node) {
            messages::DEBUG_PERM_GRANTED
        } else {
            messages::DEBUG_PERM_DENIED
        };
        ctx.messenger()
            .send_message(sender, key, &[("sender", sender.name()), ("node", node)]);
        Ok(())
    }

    fn tab_complete(
        &self,
        ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        args: &[String],
    ) -> Vec<String> {
        match args {
            [partial] => partial_matches(partial, ctx.root.permission_nodes()),
            _ => Vec::new(),
        }
    }
}
