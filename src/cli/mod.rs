//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the effective file constraints
//! - `serve` - Development public config server

pub mod args;

pub use args::{Cli, Commands};
