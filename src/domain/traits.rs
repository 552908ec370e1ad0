//! # Domain Traits
//!
//! Abstract interfaces for the collaborators the command tree talks to (senders, messaging).
//! Allows for pluggable implementations in the Infrastructure layer.

/// The actor issuing a command (a player or the console).
///
/// Senders are only ever touched from the thread running the dispatch, so no
/// `Send`/`Sync` bound is required.
pub trait CommandSender {
    fn name(&self) -> &str;

    /// Whether the sender holds the given permission node.
    fn has_permission(&self, node: &str) -> bool;

    /// Deliver an already rendered (colour-coded) line of text.
    fn send_message(&self, message: &str);
}

/// Resolves message ids to text and delivers them to senders.
pub trait Messenger {
    /// Send a message with the configured prefix.
    fn send_message(&self, sender: &dyn CommandSender, key: &str, placeholders: &[(&str, &str)]);

    /// Send a message without the prefix (used for list entries).
    fn send_simple_message(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        placeholders: &[(&str, &str)],
    );
}
