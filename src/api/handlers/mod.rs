//! HTTP request handlers.

pub mod config_handler;

pub use config_handler::config_routes;
