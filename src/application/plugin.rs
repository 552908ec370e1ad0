//! # Plugin Command
//!
//! The entry points the host runtime calls: one for executing a command line and
//! one for tab completion. Owns the root of the command tree and the plugin services.

use crate::application::context::{CommandContext, PluginContext};
use crate::application::handler::CommandHandler;
use crate::domain::traits::CommandSender;

pub struct PluginCommand {
    context: PluginContext,
    root: CommandHandler,
}

impl PluginCommand {
    pub fn new(context: PluginContext, root: CommandHandler) -> Self {
        Self { context, root }
    }

    pub fn root(&self) -> &CommandHandler {
        &self.root
    }

    /// Registration changes need `&mut self`, so they can never overlap a dispatch.
    pub fn root_mut(&mut self) -> &mut CommandHandler {
        &mut self.root
    }

    pub fn context(&self) -> &PluginContext {
        &self.context
    }

    /// Runs a command line. Always reports the command as handled.
    pub fn on_command(
        &self,
        sender: &dyn CommandSender,
        command_name: &str,
        label: &str,
        args: &[String],
    ) -> bool {
        tracing::info!(
            "{} issued command: /{} {}",
            sender.name(),
            label,
            args.join(" ")
        );
        tracing::debug!("Routing '{}' via label '{}'", command_name, label);

        let ctx = CommandContext::new(&self.context, &self.root, label);
        self.root.dispatch(&ctx, sender, args);
        true
    }

    pub fn on_tab_complete(
        &self,
        sender: &dyn CommandSender,
        command_name: &str,
        alias: &str,
        args: &[String],
    ) -> Vec<String> {
        tracing::trace!(
            "Completing '{}' via alias '{}' for {}",
            command_name,
            alias,
            sender.name()
        );
        let ctx = CommandContext::new(&self.context, &self.root, alias);
        self.root.complete(&ctx, sender, args)
    }
}
