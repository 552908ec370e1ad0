//! # Strings Module
//!
//! Centralizes user-facing strings and colour-code handling.
//! Ensures consistency in messaging and easier localization/updates.

pub mod colors;
pub mod messages;
