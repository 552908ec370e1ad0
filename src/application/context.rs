//! # Contexts
//!
//! `PluginContext` holds the long-lived services every command may use.
//! `CommandContext` is built per invocation and adds what only the host knows
//! at call time (the label typed and the root of the tree being dispatched).

use std::sync::Arc;

use crate::application::handler::CommandHandler;
use crate::domain::config::PluginInfo;
use crate::domain::traits::Messenger;

pub struct PluginContext {
    pub info: PluginInfo,
    pub messenger: Arc<dyn Messenger>,
}

impl PluginContext {
    pub fn new(info: PluginInfo, messenger: Arc<dyn Messenger>) -> Self {
        Self { info, messenger }
    }
}

#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub plugin: &'a PluginContext,
    pub root: &'a CommandHandler,
    /// The alias the sender typed (e.g. `p` for `/p help`).
    pub label: &'a str,
}

impl<'a> CommandContext<'a> {
    pub fn new(plugin: &'a PluginContext, root: &'a CommandHandler, label: &'a str) -> Self {
        Self {
            plugin,
            root,
            label,
        }
    }

    pub fn messenger(&self) -> &'a dyn Messenger {
        self.plugin.messenger.as_ref()
    }
}
