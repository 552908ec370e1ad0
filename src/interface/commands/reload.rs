//! # Reload Command
//!
//! Handles `/points reload`: re-reads the config file and swaps in the new message table.
//! Plugin info and disabled commands are read once at startup and need a restart.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::command::PointsCommand;
use crate::application::context::CommandContext;
use crate::domain::config::AppConfig;
use crate::domain::traits::CommandSender;
use crate::domain::types::CommandResult;
use crate::infrastructure::locale::LocaleMessenger;
use crate::interface::commands::PERM_RELOAD;
use crate::strings::messages;

pub struct ReloadCommand {
    locale: Arc<LocaleMessenger>,
    config_path: PathBuf,
}

impl ReloadCommand {
    pub fn new(locale: Arc<LocaleMessenger>, config_path: PathBuf) -> Self {
        Self {
            locale,
            config_path,
        }
    }
}

impl PointsCommand for ReloadCommand {
    fn name(&self) -> &str {
        "reload"
    }

    fn description(&self) -> &str {
        "Reloads the plugin configuration and messages"
    }

    fn permission(&self) -> Option<&str> {
        Some(PERM_RELOAD)
    }

    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        sender: &dyn CommandSender,
        _args: &[String],
    ) -> CommandResult {
        match AppConfig::load_or_default(&self.config_path) {
            Ok(config) => {
                self.locale.reload(&config.messages);
                tracing::info!("{} reloaded {}", sender.name(), self.config_path.display());
                ctx.messenger()
                    .send_message(sender, messages::RELOAD_SUCCESS, &[]);
            }
            Err(e) => {
                tracing::warn!("Reload requested by {} failed: {:#}", sender.name(), e);
                let error = e.to_string();
                ctx.messenger()
                    .send_message(sender, messages::RELOAD_FAILED, &[("error", error.as_str())]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::PluginContext;
    use crate::application::handler::CommandHandler;
    use crate::domain::config::{MessagesConfig, PluginInfo};
    use crate::interface::commands::hooks::RootHooks;
    use crate::testkit::{RecordingSender, args};
    use std::fs;

    fn setup(path: PathBuf) -> (PluginContext, CommandHandler, Arc<LocaleMessenger>) {
        let locale = Arc::new(LocaleMessenger::new(&MessagesConfig::default()));
        let plugin = PluginContext::new(PluginInfo::default(), locale.clone());
        let mut root = CommandHandler::new("points", RootHooks::new());
        root.register_command("reload", Box::new(ReloadCommand::new(locale.clone(), path)));
        (plugin, root, locale)
    }

    #[test]
    fn test_reload_applies_new_messages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "messages:\n  prefix: \"\"\n").unwrap();
        let (plugin, root, locale) = setup(path.clone());

        fs::write(
            &path,
            "messages:\n  prefix: \"\"\n  overrides:\n    command-reload-success: \"&aDone\"\n",
        )
        .unwrap();

        let op = RecordingSender::new("op", &["playerpoints.reload"]);
        let ctx = CommandContext::new(&plugin, &root, "points");
        root.dispatch(&ctx, &op, &args(&["reload"]));

        assert_eq!(op.messages(), vec!["\u{a7}aDone".to_string()]);
        assert_eq!(locale.render(messages::RELOAD_SUCCESS, &[]), "\u{a7}aDone");
    }

    #[test]
    fn test_reload_reports_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "commands: [broken").unwrap();
        let (plugin, root, _locale) = setup(path);

        let op = RecordingSender::new("op", &["*"]);
        let ctx = CommandContext::new(&plugin, &root, "points");
        root.dispatch(&ctx, &op, &args(&["reload"]));

        let messages = op.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Reload failed"));
    }

    #[test]
    fn test_reload_missing_config_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "messages:\n  prefix: \"\"\n  overrides:\n    command-reload-success: \"&aDone\"\n",
        )
        .unwrap();
        let (plugin, root, locale) = setup(path.clone());
        let op = RecordingSender::new("op", &["*"]);
        let ctx = CommandContext::new(&plugin, &root, "points");
        root.dispatch(&ctx, &op, &args(&["reload"]));
        assert_eq!(locale.render(messages::RELOAD_SUCCESS, &[]), "\u{a7}aDone");

        fs::remove_file(&path).unwrap();
        root.dispatch(&ctx, &op, &args(&["reload"]));

        let sent = op.messages();
        assert_eq!(sent.len(), 2);
        assert!(!sent[1].contains("Reload failed"));
        assert_eq!(
            locale.render(messages::RELOAD_SUCCESS, &[]),
            "\u{a7}aConfiguration and locale files were reloaded."
        );
    }

    #[test]
    fn test_reload_requires_permission() {
        let dir = tempfile::tempdir().unwrap();
        let (plugin, root, _locale) = setup(dir.path().join("config.yaml"));

        let player = RecordingSender::new("bob", &[]);
        let ctx = CommandContext::new(&plugin, &root, "points");
        root.dispatch(&ctx, &player, &args(&["reload"]));

        let messages = player.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].ends_with("You don't have permission for that!"));
    }
}
