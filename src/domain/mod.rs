//! # Domain Layer
//!
//! Core definitions, types, and traits that define the command tree's contracts.
//! Independent of any particular host runtime, serving as the contract for the other layers.

pub mod config;
pub mod paths;
pub mod permissions;
pub mod traits;
pub mod types;
