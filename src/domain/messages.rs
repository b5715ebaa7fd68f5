//! User-facing message templates.
//!
//! Raw errors and status codes never reach the user directly; they are
//! translated here first.

use std::borrow::Cow;

use crate::config::HTTP_ERROR_MESSAGES;

/// Sentence for an HTTP status, or `Error code {n}` when unmapped.
pub fn http_error_message(status: u16) -> Cow<'static, str> {
    HTTP_ERROR_MESSAGES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, msg)| Cow::Borrowed(*msg))
        .unwrap_or_else(|| Cow::Owned(format!("Error code {}", status)))
}

/// Why an upload failed, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFailure {
    /// The server answered with this status.
    Status(u16),
    /// Anything else; rendered verbatim.
    Other(String),
}

impl From<u16> for UploadFailure {
    fn from(status: u16) -> Self {
        Self::Status(status)
    }
}

impl From<&str> for UploadFailure {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<String> for UploadFailure {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

pub mod error {
    pub mod file {
        pub mod validation {
            pub const EMPTY: &str = "File is empty. Please select a valid file.";
            pub const INVALID_TYPE: &str =
                "Invalid file type detected. Please select a genuine PDF, DOC, DOCX, or TXT file.";
            pub const UNSUPPORTED_TYPE: &str =
                "Unsupported file type. Please upload a PDF, DOC, DOCX, or TXT file.";
            pub const NOT_SELECTED: &str = "Please select a file before continuing.";

            /// `size_label` is preformatted by the caller, e.g. `12.4MB`.
            pub fn oversized(size_label: &str, max_size_mb: f64) -> String {
                format!(
                    "File too large ({}). Maximum size is {}MB.",
                    size_label, max_size_mb
                )
            }
        }

        pub mod upload {
            use crate::domain::messages::{http_error_message, UploadFailure};

            pub const CANCELLED: &str = "File upload was cancelled.";
            pub const TIMEOUT: &str = "File upload timed out. Please try again.";
            pub const UNKNOWN: &str = "Unknown error. Please try again.";

            pub fn failed(failure: impl Into<UploadFailure>) -> String {
                let reason = match failure.into() {
                    UploadFailure::Status(code) => http_error_message(code).into_owned(),
                    UploadFailure::Other(msg) if msg.trim().is_empty() => {
                        "unknown error".to_string()
                    }
                    UploadFailure::Other(msg) => msg,
                };
                format!("File upload failed: {}. Please try again.", reason)
            }
        }
    }

    pub mod auth {
        pub const LOGIN: &str = "Login failed. Please try again.";
        pub const SIGNUP: &str = "Signup failed. Please try again.";
        pub const UNKNOWN: &str = "Unable to complete request. Please try again.";
    }

    pub mod system {
        pub const NETWORK: &str = "Network error. Please check your connection.";
        pub const SERVER: &str = "Server error. Please try again later.";
    }
}

pub mod success {
    pub mod file {
        pub const UPLOAD: &str = "File uploaded successfully.";
    }

    pub mod auth {
        pub const LOGIN: &str = "Logged in successfully.";
        pub const LOGOUT: &str = "Logged out successfully.";
        pub const SIGNUP: &str = "Account created successfully.";
    }
}
