//! Recording doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::application::command::{PointsCommand, partial_matches};
use crate::application::context::{CommandContext, PluginContext};
use crate::application::handler::{CommandHandler, HandlerHooks};
use crate::domain::config::PluginInfo;
use crate::domain::permissions::PermissionSet;
use crate::domain::traits::{CommandSender, Messenger};
use crate::domain::types::CommandResult;

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub struct RecordingSender {
    name: String,
    permissions: PermissionSet,
    messages: RefCell<Vec<String>>,
}

impl RecordingSender {
    pub fn new(name: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            permissions: PermissionSet::new(permissions),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl CommandSender for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.allows(node)
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub sender: String,
    pub key: String,
    pub placeholders: Vec<(String, String)>,
    pub prefixed: bool,
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: RefCell<Vec<SentMessage>>,
}

impl RecordingMessenger {
    /// `(sender, key)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent
            .borrow()
            .iter()
            .map(|m| (m.sender.clone(), m.key.clone()))
            .collect()
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.borrow().clone()
    }

    fn record(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        placeholders: &[(&str, &str)],
        prefixed: bool,
    ) {
        self.sent.borrow_mut().push(SentMessage {
            sender: sender.name().to_string(),
            key: key.to_string(),
            placeholders: placeholders
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            prefixed,
        });
    }
}

impl Messenger for RecordingMessenger {
    fn send_message(&self, sender: &dyn CommandSender, key: &str, placeholders: &[(&str, &str)]) {
        self.record(sender, key, placeholders, true);
    }

    fn send_simple_message(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        placeholders: &[(&str, &str)],
    ) {
        self.record(sender, key, placeholders, false);
    }
}

pub struct TestPlugin {
    pub plugin: PluginContext,
    pub messenger: Arc<RecordingMessenger>,
}

impl TestPlugin {
    pub fn new() -> Self {
        let messenger = Arc::new(RecordingMessenger::default());
        Self {
            plugin: PluginContext::new(PluginInfo::default(), messenger.clone()),
            messenger,
        }
    }

    pub fn context<'a>(&'a self, root: &'a CommandHandler) -> CommandContext<'a> {
        CommandContext::new(&self.plugin, root, "points")
    }
}

type Handler = Rc<dyn Fn(&[String]) -> CommandResult>;

#[derive(Clone)]
pub struct RecordingCommand {
    name: String,
    permission: Option<String>,
    completions: Vec<String>,
    handler: Handler,
    calls: Rc<RefCell<Vec<Vec<String>>>>,
    completion_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl RecordingCommand {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            permission: None,
            completions: Vec::new(),
            handler: Rc::new(|_: &[String]| -> CommandResult { Ok(()) }),
            calls: Rc::default(),
            completion_calls: Rc::default(),
        }
    }

    pub fn with_permission(mut self, node: &str) -> Self {
        self.permission = Some(node.to_string());
        self
    }

    pub fn with_completions(mut self, completions: &[&str]) -> Self {
        self.completions = args(completions);
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[String]) -> CommandResult + 'static,
    {
        self.handler = Rc::new(handler);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn completion_calls(&self) -> Vec<Vec<String>> {
        self.completion_calls.borrow().clone()
    }
}

impl PointsCommand for RecordingCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        args: &[String],
    ) -> CommandResult {
        self.calls.borrow_mut().push(args.to_vec());
        (self.handler)(args)
    }

    fn tab_complete(
        &self,
        _ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        args: &[String],
    ) -> Vec<String> {
        self.completion_calls.borrow_mut().push(args.to_vec());
        let partial = args.last().map(String::as_str).unwrap_or("");
        partial_matches(partial, &self.completions)
    }
}

#[derive(Clone, Default)]
pub struct RecordingHooks {
    permission: Option<String>,
    no_args: Rc<RefCell<usize>>,
    unknown: Rc<RefCell<Vec<Vec<String>>>>,
}

impl RecordingHooks {
    pub fn with_permission(mut self, node: &str) -> Self {
        self.permission = Some(node.to_string());
        self
    }

    pub fn no_args_calls(&self) -> usize {
        *self.no_args.borrow()
    }

    pub fn unknown_calls(&self) -> Vec<Vec<String>> {
        self.unknown.borrow().clone()
    }
}

impl HandlerHooks for RecordingHooks {
    fn no_args(
        &self,
        _ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        _handler: &CommandHandler,
    ) {
        *self.no_args.borrow_mut() += 1;
    }

    fn unknown_command(
        &self,
        _ctx: &CommandContext<'_>,
        _sender: &dyn CommandSender,
        _handler: &CommandHandler,
        args: &[String],
    ) {
        self.unknown.borrow_mut().push(args.to_vec());
    }

    fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }
}
