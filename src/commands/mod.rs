//! Commands module - CLI command implementations.

pub mod serve;
pub mod show;
