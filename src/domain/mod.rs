//! Domain layer - constraints, public config, messages and toast state.
//!
//! Nothing in here performs I/O or spawns tasks.

pub mod constraints;
pub mod messages;
pub mod modal;
pub mod public_config;
pub mod toast;

pub use constraints::{unique_preserving_order, AppliedFields, FileConstraints, Registry};
pub use messages::{http_error_message, UploadFailure};
pub use modal::ModalType;
pub use public_config::{PublicConfig, Violation, Violations};
pub use toast::{ToastKind, ToastPhase, ToastState};
