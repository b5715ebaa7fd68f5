//! Application configuration module
//!
//! Handles environment variables and application-wide constants.

mod constants;
pub mod env;
mod server;
mod settings;
mod timing;

pub use constants::*;
pub use env::{require_env, require_env_with};
pub use server::ServerSettings;
pub use settings::Config;
pub use timing::Timing;
