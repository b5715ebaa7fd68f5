//! Infrastructure layer - External systems integration
//!
//! - HTTP transport for the public config document
//! - Abort signals for in-flight requests

pub mod abort;
pub mod http;

pub use abort::{AbortController, AbortSignal};
pub use http::{HttpConfigSource, PublicConfigSource};

#[cfg(any(test, feature = "test-utils"))]
pub use http::MockPublicConfigSource;
