//! Application services layer.
//!
//! Services own the runtime state (registry handle, toast slot) and the
//! async work that mutates it. The domain layer stays I/O free.

pub mod config_loader;
pub mod container;
pub mod toast;

pub use config_loader::{ConfigLoader, LoadOutcome};
pub use container::Services;
pub use toast::Toaster;
