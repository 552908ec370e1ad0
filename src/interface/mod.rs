//! # Interface Layer
//!
//! The concrete `/points` command tree the plugin exposes.

pub mod commands;
