//! # Version Command
//!
//! Handles `/points version`.

use crate::application::command::PointsCommand;
use crate::application::context::CommandContext;
use crate::domain::traits::CommandSender;
use crate::domain::types::CommandResult;
use crate::strings::messages;

pub struct VersionCommand;

impl PointsCommand for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn description(&self) -> &str {
        "Displays the plugin version"
    }

    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _args: &[String],
    ) -> CommandResult {
        let info = &ctx.plugin.info;
        ctx.messenger().send_message(
            sender,
            messages::VERSION_INFO,
            &[("name", info.name.as_str()), ("version", info.version.as_str())],
        );
        Ok(())
    }
}
