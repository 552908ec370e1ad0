//! # Command Handler
//!
//! A node in the command tree. Each handler owns the leaf commands and the child
//! handlers registered under it, and forwards a tokenized command line to the
//! first matching registration, consuming one token per level.
//!
//! Children are checked before leaves, so a child handler shadows a leaf
//! registered under the same name.

use std::collections::HashMap;

use crate::application::command::{Executable, PointsCommand, partial_matches};
use crate::application::context::CommandContext;
use crate::domain::traits::CommandSender;
use crate::domain::types::CommandError;
use crate::strings::messages;

/// Per-node behaviour that differs between the root and sub-handlers.
pub trait HandlerHooks {
    /// Called when the handler is invoked with no further arguments.
    fn no_args(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        handler: &CommandHandler,
    );

    /// Called when the first argument matches nothing. `args` still includes that token.
    fn unknown_command(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        handler: &CommandHandler,
        args: &[String],
    );

    /// Permission node guarding the whole sub-tree. `None` means everyone.
    fn permission(&self) -> Option<&str> {
        None
    }

    fn has_permission(&self, sender: &dyn CommandSender) -> bool {
        self.permission()
            .is_none_or(|node| sender.has_permission(node))
    }
}

pub struct CommandHandler {
    name: String,
    description: String,
    hooks: Box<dyn HandlerHooks>,
    commands: HashMap<String, Box<dyn PointsCommand>>,
    handlers: HashMap<String, CommandHandler>,
}

impl CommandHandler {
    pub fn new(name: impl Into<String>, hooks: impl HandlerHooks + 'static) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: String::new(),
            hooks: Box::new(hooks),
            commands: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permission(&self) -> Option<&str> {
        self.hooks.permission()
    }

    pub fn has_permission(&self, sender: &dyn CommandSender) -> bool {
        self.hooks.has_permission(sender)
    }

    /// Registers `command` under `label`, replacing (and returning) any previous entry.
    pub fn register_command(
        &mut self,
        label: &str,
        command: Box<dyn PointsCommand>,
    ) -> Option<Box<dyn PointsCommand>> {
        let label = label.to_lowercase();
        let previous = self.commands.insert(label.clone(), command);
        if previous.is_some() {
            tracing::warn!("Replacing existing command for: {}", label);
        }
        previous
    }

    pub fn unregister_command(&mut self, label: &str) -> Option<Box<dyn PointsCommand>> {
        self.commands.remove(&label.to_lowercase())
    }

    /// Registers a child handler under its own name, replacing (and returning) any previous one.
    pub fn register_handler(&mut self, handler: CommandHandler) -> Option<CommandHandler> {
        let label = handler.name.clone();
        let previous = self.handlers.insert(label.clone(), handler);
        if previous.is_some() {
            tracing::warn!("Replacing existing handler for: {}", label);
        }
        previous
    }

    pub fn unregister_handler(&mut self, label: &str) -> Option<CommandHandler> {
        self.handlers.remove(&label.to_lowercase())
    }

    /// Removes a leaf addressed by a dotted path such as `debug.tree`.
    /// Returns whether anything was removed.
    pub fn unregister_command_path(&mut self, path: &str) -> bool {
        match path.split_once('.') {
            Some((child, rest)) => self
                .handlers
                .get_mut(&child.to_lowercase())
                .is_some_and(|handler| handler.unregister_command_path(rest)),
            None => self.unregister_command(path).is_some(),
        }
    }

    pub fn command(&self, label: &str) -> Option<&dyn PointsCommand> {
        self.commands.get(&label.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn handler(&self, label: &str) -> Option<&CommandHandler> {
        self.handlers.get(&label.to_lowercase())
    }

    pub fn handler_mut(&mut self, label: &str) -> Option<&mut CommandHandler> {
        self.handlers.get_mut(&label.to_lowercase())
    }

    /// Every child handler and leaf command, sorted by name.
    pub fn executables(&self) -> Vec<Executable<'_>> {
        let mut executables: Vec<Executable<'_>> = self
            .handlers
            .values()
            .map(Executable::Handler)
            .chain(self.commands.iter().map(|(label, command)| Executable::Command {
                label: label.as_str(),
                command: command.as_ref(),
            }))
            .collect();
        executables.sort_by(|a, b| a.name().cmp(b.name()));
        executables
    }

    /// Every permission node referenced anywhere in this sub-tree, sorted and deduplicated.
    pub fn permission_nodes(&self) -> Vec<String> {
        let mut nodes = Vec::new();
        self.collect_permission_nodes(&mut nodes);
        nodes.sort();
        nodes.dedup();
        nodes
    }

    fn collect_permission_nodes(&self, nodes: &mut Vec<String>) {
        if let Some(node) = self.permission() {
            nodes.push(node.to_string());
        }
        nodes.extend(
            self.commands
                .values()
                .filter_map(|c| c.permission().map(str::to_string)),
        );
        for handler in self.handlers.values() {
            handler.collect_permission_nodes(nodes);
        }
    }

    /// Routes `args` to the matching child handler or leaf command.
    pub fn dispatch(&self, ctx: &CommandContext<'_>, sender: &dyn CommandSender, args: &[String]) {
        let Some(first) = args.first() else {
            self.hooks.no_args(ctx, sender, self);
            return;
        };

        let token = first.to_lowercase();
        tracing::debug!(
            "Handler '{}' dispatching token='{}' sender='{}'",
            self.name,
            token,
            sender.name()
        );

        if let Some(handler) = self.handlers.get(&token) {
            if !handler.has_permission(sender) {
                ctx.messenger()
                    .send_message(sender, messages::NO_PERMISSION, &[]);
                return;
            }
            handler.dispatch(ctx, sender, &args[1..]);
            return;
        }

        let Some(command) = self.commands.get(&token) else {
            self.hooks.unknown_command(ctx, sender, self, args);
            return;
        };

        if !command.has_permission(sender) {
            ctx.messenger()
                .send_message(sender, messages::NO_PERMISSION, &[]);
            return;
        }

        if let Err(err) = command.execute(ctx, sender, &args[1..]) {
            report_error(ctx, sender, &token, err);
        }
    }

    /// Suggestions for the last element of `args`.
    pub fn complete(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        args: &[String],
    ) -> Vec<String> {
        let Some(first) = args.first() else {
            return Vec::new();
        };
        let token = first.to_lowercase();

        if args.len() == 1 {
            let handlers = self
                .handlers
                .iter()
                .filter(|(_, handler)| handler.has_permission(sender))
                .map(|(label, _)| label.as_str());
            let commands = self
                .commands
                .iter()
                .filter(|(_, command)| command.has_permission(sender))
                .map(|(label, _)| label.as_str());

            let mut completions = partial_matches(&token, handlers.chain(commands));
            completions.sort();
            completions.dedup();
            return completions;
        }

        // A denied child still shadows a same-named leaf, as it does in dispatch
        if let Some(handler) = self.handlers.get(&token) {
            if !handler.has_permission(sender) {
                return Vec::new();
            }
            return handler.complete(ctx, sender, &args[1..]);
        }

        match self.commands.get(&token) {
            Some(command) if command.has_permission(sender) => {
                command.tab_complete(ctx, sender, &args[1..])
            }
            _ => Vec::new(),
        }
    }
}

fn report_error(
    ctx: &CommandContext<'_>,
    sender: &dyn CommandSender,
    label: &str,
    err: CommandError,
) {
    match err {
        CommandError::Usage(message) => sender.send_message(&messages::usage_error(&message)),
        err if err.is_argument_error() => {
            tracing::debug!(
                "Command '{}' rejected arguments from {}: {}",
                label,
                sender.name(),
                err
            );
            sender.send_message(&messages::command_error(&ctx.plugin.info.name));
        }
        err => {
            tracing::error!("Command '{}' failed for {}: {:#}", label, sender.name(), err);
            sender.send_message(&messages::command_error(&ctx.plugin.info.name));
        }
    }
}
