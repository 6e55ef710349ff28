//! Teevi CLI library - expose modules for testing
//!
//! This library exposes the command handlers and configuration loader
//! needed for testing and integration.

pub mod commands;
pub mod common;
pub mod pack_config;

pub use common::GlobalOpts;
