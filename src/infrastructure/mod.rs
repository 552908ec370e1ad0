//! # Infrastructure Layer
//!
//! Handles interactions with the outside world: the terminal, log sinks and the message table.
//! Implements the traits defined in the Domain layer (e.g., CommandSender, Messenger).

pub mod console;
pub mod locale;
pub mod log_buffer;
pub mod logging;
