//! # Locale Messenger
//!
//! The message table: defaults from `strings::messages`, overridden by config.
//! Messages are looked up by id, `{placeholder}`s are substituted and the result is
//! delivered to the sender. The table can be swapped at runtime by `/points reload`.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::config::MessagesConfig;
use crate::domain::traits::{CommandSender, Messenger};
use crate::strings::{colors, messages};

#[derive(Debug, Clone)]
struct MessageTable {
    prefix: String,
    entries: HashMap<String, String>,
}

impl MessageTable {
    fn build(config: &MessagesConfig) -> Self {
        let mut entries: HashMap<String, String> = messages::DEFAULTS
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        for (key, text) in &config.overrides {
            entries.insert(key.clone(), text.clone());
        }

        Self {
            prefix: config
                .prefix
                .clone()
                .unwrap_or_else(|| messages::PREFIX.to_string()),
            entries,
        }
    }
}

pub struct LocaleMessenger {
    table: RwLock<MessageTable>,
}

impl LocaleMessenger {
    pub fn new(config: &MessagesConfig) -> Self {
        Self {
            table: RwLock::new(MessageTable::build(config)),
        }
    }

    /// Replaces the whole table. Overrides removed from config fall back to defaults.
    pub fn reload(&self, config: &MessagesConfig) {
        let table = MessageTable::build(config);
        let count = table.entries.len();
        *self.table.write().unwrap_or_else(|e| e.into_inner()) = table;
        tracing::info!("Loaded {} messages", count);
    }

    /// Renders a message (without prefix) with colour codes translated.
    pub fn render(&self, key: &str, placeholders: &[(&str, &str)]) -> String {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        let template = match table.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!("Missing message for key '{}'", key);
                messages::missing_message(key)
            }
        };
        colors::translate_alternate(&apply_placeholders(&template, placeholders))
    }

    fn prefix(&self) -> String {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        colors::translate_alternate(&table.prefix)
    }
}

impl Messenger for LocaleMessenger {
    fn send_message(&self, sender: &dyn CommandSender, key: &str, placeholders: &[(&str, &str)]) {
        let text = self.render(key, placeholders);
        // Blank messages are how server owners silence a message
        if colors::strip(&text).trim().is_empty() {
            return;
        }
        sender.send_message(&format!("{}{}", self.prefix(), text));
    }

    fn send_simple_message(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        placeholders: &[(&str, &str)],
    ) {
        let text = self.render(key, placeholders);
        if colors::strip(&text).trim().is_empty() {
            return;
        }
        sender.send_message(&text);
    }
}

fn apply_placeholders(template: &str, placeholders: &[(&str, &str)]) -> String {
    placeholders
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
