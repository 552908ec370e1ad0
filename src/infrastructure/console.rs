//! # Console Host
//!
//! Terminal stand-ins for the game server: a sender that prints to stdout and a
//! line parser that turns typed input into host command/completion invocations.

use anyhow::{Result, bail};

use crate::domain::config::AppConfig;
use crate::domain::permissions::PermissionSet;
use crate::domain::traits::CommandSender;
use crate::strings::colors;

pub const CONSOLE_NAME: &str = "console";

/// A sender whose messages go to the terminal.
#[derive(Debug, Clone)]
pub struct ConsoleSender {
    name: String,
    permissions: PermissionSet,
    ansi: bool,
}

impl ConsoleSender {
    /// The server console: holds every permission.
    pub fn console() -> Self {
        Self::new(CONSOLE_NAME, PermissionSet::all())
    }

    pub fn new(name: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            name: name.into(),
            permissions,
            ansi: true,
        }
    }

    /// Resolves `--sender`: `console` (any case) or a name listed under `senders:`.
    pub fn from_config(config: &AppConfig, name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case(CONSOLE_NAME) {
            return Ok(Self::console());
        }
        match config.senders.get(name) {
            Some(sender) => Ok(Self::new(name, PermissionSet::new(&sender.permissions))),
            None => bail!(
                "Unknown sender '{}'. Add it under `senders:` in the config.",
                name
            ),
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// What `send_message` would print for `message`.
    pub fn format(&self, message: &str) -> String {
        if self.ansi {
            colors::to_ansi(message)
        } else {
            colors::strip(message)
        }
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.allows(node)
    }

    fn send_message(&self, message: &str) {
        println!("{}", self.format(message));
    }
}

/// Console-only commands, prefixed with `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Logs(usize),
    Help,
    Quit,
    Unknown(String),
}

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Meta(MetaCommand),
    Command { label: String, args: Vec<String> },
    Complete { label: String, args: Vec<String> },
}

const DEFAULT_LOG_LINES: usize = 20;

/// Parses one line of input. Returns `None` for blank lines.
///
/// A line starting with `?` or ending with a tab asks for completions instead of
/// running the command. A trailing space then means "complete the next, empty argument",
/// mirroring how game clients send partial command lines.
pub fn parse_line(line: &str) -> Option<ConsoleLine> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }

    if let Some(meta) = line.trim().strip_prefix(':') {
        return Some(ConsoleLine::Meta(parse_meta(meta)));
    }

    let (body, complete) = if let Some(rest) = line.trim_start().strip_prefix('?') {
        (rest.trim_end_matches('\t'), true)
    } else if let Some(rest) = line.strip_suffix('\t') {
        (rest, true)
    } else {
        (line, false)
    };

    let mut tokens = body.split_whitespace();
    let label = tokens.next()?.trim_start_matches('/').to_string();
    let mut args: Vec<String> = tokens.map(str::to_string).collect();

    if complete {
        if body.ends_with(' ') {
            args.push(String::new());
        }
        Some(ConsoleLine::Complete { label, args })
    } else {
        Some(ConsoleLine::Command { label, args })
    }
}

fn parse_meta(meta: &str) -> MetaCommand {
    let mut parts = meta.split_whitespace();
    match parts.next().map(str::to_lowercase).as_deref() {
        Some("logs") => {
            let n = parts
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_LOG_LINES);
            MetaCommand::Logs(n)
        }
        Some("help") => MetaCommand::Help,
        Some("quit") | Some("exit") | Some("q") => MetaCommand::Quit,
        _ => MetaCommand::Unknown(meta.trim().to_string()),
    }
}
