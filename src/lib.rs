//! Client Config - Runtime configuration support for a file-upload client
//!
//! Provides the pieces every screen of the client relies on: a validated
//! environment, a registry of shared constants and file constraints, a
//! best-effort loader that enriches the registry from the backend's
//! `/public-config` document, and a self-dismissing toast notifier.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment access, constants and timing
//! - **domain**: File constraints, public config validation, messages, toast state
//! - **services**: Config loader, toast notifier, service container
//! - **infra**: HTTP transport and abort signals
//! - **api**: Development server for `/public-config`
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the effective constraints
//! CLIENT_API_BASE_URL=http://localhost:8081 cargo run -- show
//!
//! # Serve /public-config locally
//! cargo run -- serve --port 8081
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Config, Timing};
pub use domain::{FileConstraints, PublicConfig, Registry, ToastKind, ToastState};
pub use errors::{AppError, AppResult};
pub use services::{ConfigLoader, LoadOutcome, Services, Toaster};
