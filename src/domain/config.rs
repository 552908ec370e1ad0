//! # Configuration
//!
//! Manages the loading and parsing of the plugin's configuration file (`config.yaml`).
//! Defines the structs for plugin metadata, message overrides, console senders and command toggles.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main plugin configuration structure.
/// Matches the layout of `data/config.yaml`. Every section is optional.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub plugin: PluginInfo,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub senders: HashMap<String, SenderConfig>,
}

impl AppConfig {
    /// Reads and parses the YAML config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Name and version reported by `/points version` and used in error messages.
#[derive(Debug, Deserialize, Clone)]
pub struct PluginInfo {
    #[serde(default = "default_plugin_name")]
    pub name: String,
    #[serde(default = "default_plugin_version")]
    pub version: String,
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: default_plugin_name(),
            version: default_plugin_version(),
        }
    }
}

fn default_plugin_name() -> String {
    "PlayerPoints".to_string()
}

fn default_plugin_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Overrides for the message table.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MessagesConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    /// Keyed by message id (e.g. `no-permission`).
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    /// Primary command name the host registers.
    #[serde(default = "default_command_name")]
    pub name: String,
    #[serde(default = "default_aliases")]
    pub aliases: Vec<String>,
    /// Leaf commands removed from the tree at startup.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            name: default_command_name(),
            aliases: default_aliases(),
            disabled: Vec::new(),
        }
    }
}

impl CommandsConfig {
    /// Whether `label` invokes this plugin's command (case-insensitive).
    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.name.to_lowercase() == label || self.aliases.iter().any(|a| a.to_lowercase() == label)
    }
}

fn default_command_name() -> String {
    "points".to_string()
}

fn default_aliases() -> Vec<String> {
    vec!["p".to_string()]
}

/// A named console identity and the permission nodes it holds.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SenderConfig {
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.plugin.name, "PlayerPoints");
        assert_eq!(config.commands.name, "points");
        assert_eq!(config.commands.aliases, vec!["p".to_string()]);
        assert!(config.commands.disabled.is_empty());
        assert!(config.senders.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
plugin:
  name: Points
  version: "3.2.1"
messages:
  prefix: "&8[&bPts&8] "
  overrides:
    no-permission: "&cNope."
commands:
  name: pts
  aliases: [p, points]
  disabled: [reload]
senders:
  alice:
    permissions: [playerpoints.reload, "playerpoints.debug.*"]
"#;
        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.plugin.name, "Points");
        assert_eq!(config.plugin.version, "3.2.1");
        assert_eq!(config.messages.prefix.as_deref(), Some("&8[&bPts&8] "));
        assert_eq!(config.messages.overrides["no-permission"], "&cNope.");
        assert_eq!(config.commands.disabled, vec!["reload".to_string()]);
        assert_eq!(config.senders["alice"].permissions.len(), 2);
        assert!(config.commands.matches("PTS"));
        assert!(config.commands.matches("points"));
        assert!(!config.commands.matches("money"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "commands:\n  disabled: [version]").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.commands.disabled, vec!["version".to_string()]);
        assert_eq!(config.commands.name, "points");
    }

    #[test]
    fn test_load_or_default_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config.commands.name, "points");
        assert!(config.senders.is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "commands: 42").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
