//! # pointcmd
//!
//! Hierarchical command dispatch for the PlayerPoints `/points` command:
//! - Domain: configuration, permission sets, sender/messaging contracts, command results
//! - Application: the command tree (handlers, leaf commands, contexts, host adapter)
//! - Infrastructure: console sender, message table, logging
//! - Interface: the concrete `/points` commands
//!

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;

#[cfg(test)]
pub(crate) mod testkit;
