//! # Command Tree
//!
//! Builds the `/points` tree: the root handler, its leaf commands and sub-handlers.

pub mod debug;
pub mod help;
pub mod hooks;
pub mod reload;
pub mod version;

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::handler::CommandHandler;
use crate::infrastructure::locale::LocaleMessenger;
use hooks::RootHooks;

pub const PERM_RELOAD: &str = "playerpoints.reload";
pub const PERM_DEBUG: &str = "playerpoints.debug";

/// Builds the full tree rooted at `name`.
pub fn build_root(
    name: &str,
    hooks: RootHooks,
    locale: Arc<LocaleMessenger>,
    config_path: PathBuf,
) -> CommandHandler {
    let mut root = CommandHandler::new(name, hooks);
    root.register_command("help", Box::new(help::HelpCommand));
    root.register_command("version", Box::new(version::VersionCommand));
    root.register_command(
        "reload",
        Box::new(reload::ReloadCommand::new(locale, config_path)),
    );
    root.register_handler(debug::handler());
    root
}

/// Unregisters each listed leaf (dotted paths reach into sub-handlers, e.g. `debug.perm`).
/// Returns how many were removed.
pub fn apply_disabled(root: &mut CommandHandler, disabled: &[String]) -> usize {
    let mut removed = 0;
    for path in disabled {
        if root.unregister_command_path(path) {
            tracing::info!("Disabled command: {}", path);
            removed += 1;
        } else {
            tracing::warn!("Cannot disable unknown command: {}", path);
        }
    }
    removed
}
