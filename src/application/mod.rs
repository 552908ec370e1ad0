//! # Application Layer
//!
//! Contains the command tree itself: the dispatcher nodes, the leaf command contract,
//! the per-call context and the adapter the host runtime calls into.

pub mod command;
pub mod context;
pub mod handler;
pub mod plugin;
