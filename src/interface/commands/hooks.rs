//! # Handler Hooks
//!
//! The no-args / unknown-command behaviour of the root `/points` node and of the
//! purpose-built sub-handlers hanging off it.

use crate::application::context::CommandContext;
use crate::application::handler::{CommandHandler, HandlerHooks};
use crate::domain::traits::CommandSender;
use crate::interface::commands::help;
use crate::strings::messages;

/// Gives the root a chance to interpret an unmatched first token as something
/// else (for example a player name for `/points <player>`).
pub trait UnknownTokenResolver {
    /// Returns `true` if the arguments were handled.
    fn resolve(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        args: &[String],
    ) -> bool;
}

#[derive(Default)]
pub struct RootHooks {
    resolver: Option<Box<dyn UnknownTokenResolver>>,
}

impl RootHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: impl UnknownTokenResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }
}

impl HandlerHooks for RootHooks {
    fn no_args(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        handler: &CommandHandler,
    ) {
        help::send_listing(ctx, sender, handler, None);
    }

    fn unknown_command(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _handler: &CommandHandler,
        args: &[String],
    ) {
        if let Some(resolver) = &self.resolver {
            if resolver.resolve(ctx, sender, args) {
                return;
            }
        }
        send_unknown(ctx, sender);
    }
}

/// Hooks for nested handlers such as `/points debug`.
#[derive(Debug, Default, Clone)]
pub struct SubHandlerHooks {
    permission: Option<String>,
}

impl SubHandlerHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permission = Some(node.into());
        self
    }
}

impl HandlerHooks for SubHandlerHooks {
    fn no_args(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        handler: &CommandHandler,
    ) {
        help::send_listing(ctx, sender, handler, Some(handler.name()));
    }

    fn unknown_command(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _handler: &CommandHandler,
        _args: &[String],
    ) {
        send_unknown(ctx, sender);
    }

    fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }
}

fn send_unknown(ctx: &CommandContext<'_>, sender: &dyn CommandSender) {
    ctx.messenger()
        .send_message(sender, messages::UNKNOWN_COMMAND, &[("cmd", ctx.label)]);
}
