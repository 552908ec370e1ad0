//! # Messages
//!
//! Default message table (keyed by message id) and the fixed strings sent by the dispatcher.
//! Config `messages.overrides` can replace any entry; `&` colour codes are translated on load.

use super::colors::RED;

pub const PREFIX: &str = "&7[&6PlayerPoints&7] &r";

pub const NO_PERMISSION: &str = "no-permission";
pub const UNKNOWN_COMMAND: &str = "unknown-command";
pub const HELP_HEADER: &str = "command-help-title";
pub const HELP_ENTRY: &str = "command-help-list-description";
pub const HELP_ENTRY_NO_ARGS: &str = "command-help-list-description-no-args";
pub const HELP_EMPTY: &str = "command-help-empty";
pub const VERSION_INFO: &str = "command-version-info";
pub const RELOAD_SUCCESS: &str = "command-reload-success";
pub const RELOAD_FAILED: &str = "command-reload-failed";
pub const DEBUG_TREE_HEADER: &str = "command-debug-tree-header";
pub const DEBUG_TREE_ENTRY: &str = "command-debug-tree-entry";
pub const DEBUG_PERM_GRANTED: &str = "command-debug-perm-granted";
pub const DEBUG_PERM_DENIED: &str = "command-debug-perm-denied";

pub const DEFAULTS: &[(&str, &str)] = &[
    (NO_PERMISSION, "&cYou don't have permission for that!"),
    (
        UNKNOWN_COMMAND,
        "&cUnknown command, use &b/{cmd} help&c for more info.",
    ),
    (HELP_HEADER, "&eCommands you have permission to use:"),
    (HELP_ENTRY, "&8 - &d/{cmd} {subcmd} {args} &7- {desc}"),
    (HELP_ENTRY_NO_ARGS, "&8 - &d/{cmd} {subcmd} &7- {desc}"),
    (HELP_EMPTY, "&cYou don't have permission to use any commands here."),
    (VERSION_INFO, "&7Running &d{name} &7v&d{version}"),
    (RELOAD_SUCCESS, "&aConfiguration and locale files were reloaded."),
    (RELOAD_FAILED, "&cReload failed: {error}"),
    (DEBUG_TREE_HEADER, "&eCommand tree for &b/{cmd}&e:"),
    (DEBUG_TREE_ENTRY, "&8{indent}- &d{name}"),
    (DEBUG_PERM_GRANTED, "&b{sender} &ahas &b{node}"),
    (DEBUG_PERM_DENIED, "&b{sender} &cdoes not have &b{node}"),
];

/// Sent when a leaf rejects its arguments or fails internally.
pub fn command_error(plugin_name: &str) -> String {
    format!(
        "{RED}A {plugin_name} error occurred while executing that command. \
         Did you enter an invalid parameter?"
    )
}

/// Sent for `CommandError::Usage`.
pub fn usage_error(message: &str) -> String {
    format!("{RED}{message}")
}

pub fn missing_message(key: &str) -> String {
    format!("&cMissing message in locale file: {key}")
}
