//! # Data Paths
//!
//! Centralized definitions for where the plugin reads its configuration and writes its logs.

use std::path::PathBuf;

pub const DATA_DIR: &str = "data";
pub const CONFIG_FILE: &str = "config.yaml";
pub const LOG_FILE: &str = "session.log";
pub const APP_DIR: &str = "pointcmd";

/// Returns the relative path to the config file (e.g. "data/config.yaml")
pub fn config_rel() -> PathBuf {
    PathBuf::from(DATA_DIR).join(CONFIG_FILE)
}

/// Returns the per-user config file location, if the platform has one.
pub fn user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Resolves which config file to use.
///
/// An explicit path always wins. Otherwise the local `data/config.yaml` is preferred,
/// then the per-user location. When none exist the local path is returned so that
/// error messages point somewhere sensible.
pub fn resolve_config(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let local = config_rel();
    if local.exists() {
        return local;
    }

    match user_config() {
        Some(user) if user.exists() => user,
        _ => local,
    }
}
