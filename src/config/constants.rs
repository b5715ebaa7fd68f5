//! Application-wide constants
//!
//! Centralized location for compiled-in defaults. File constraints listed
//! here seed the [`Registry`](crate::domain::Registry); everything else is
//! read-only for the lifetime of the process.

// =============================================================================
// Environment
// =============================================================================

/// Prefix every client-facing environment variable must carry
pub const CLIENT_ENV_PREFIX: &str = "CLIENT_";

/// Base URL of the backend API (required)
pub const ENV_API_BASE_URL: &str = "CLIENT_API_BASE_URL";

/// Optional override of the public config fetch timeout, in milliseconds
pub const ENV_CONFIG_FETCH_TIMEOUT_MS: &str = "CLIENT_CONFIG_FETCH_TIMEOUT_MS";

/// Optional override of the general network timeout, in milliseconds
pub const ENV_NETWORK_TIMEOUT_MS: &str = "CLIENT_NETWORK_TIMEOUT_MS";

/// Example value shown when a required variable is missing
pub const ENV_EXAMPLE_VALUE: &str = "http://localhost:8081";

// =============================================================================
// Public Config Endpoint
// =============================================================================

/// Path of the backend document that overrides file constraints
pub const PUBLIC_CONFIG_PATH: &str = "/public-config";

// =============================================================================
// File Constraints
// =============================================================================

/// Bytes per megabyte used when deriving the byte limit
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Default maximum upload size in megabytes
pub const DEFAULT_MAX_SIZE_MB: f64 = 10.0;

/// Default accepted file extensions (lowercase, no leading dot)
pub const DEFAULT_SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Default accepted MIME types
pub const DEFAULT_SUPPORTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

// =============================================================================
// Timing (milliseconds)
// =============================================================================

/// Delay before a visible toast starts fading out
pub const TOAST_FADE_DELAY_MS: u64 = 4500;

/// Delay before a toast is cleared, measured from when it was shown
pub const TOAST_HIDE_DELAY_MS: u64 = 5000;

/// Delay before redirecting after a successful action
pub const REDIRECT_DELAY_MS: u64 = 1000;

/// General network request timeout
pub const NETWORK_TIMEOUT_MS: u64 = 30_000;

/// Timeout for the public config fetch
pub const CONFIG_FETCH_TIMEOUT_MS: u64 = 7000;

/// Input debounce interval
pub const DEBOUNCE_DELAY_MS: u64 = 300;

// =============================================================================
// Modal Identifiers
// =============================================================================

/// Login modal identifier
pub const MODAL_LOGIN: &str = "login";

/// Signup modal identifier
pub const MODAL_SIGNUP: &str = "signup";

/// User menu modal identifier
pub const MODAL_USER_MENU: &str = "userMenu";

// =============================================================================
// HTTP Error Messages
// =============================================================================

/// User-facing sentence for each HTTP status the upload flow expects
pub const HTTP_ERROR_MESSAGES: &[(u16, &str)] = &[
    (400, "Invalid file or request"),
    (401, "Authentication required"),
    (403, "Access denied"),
    (413, "File exceeds size limit"),
    (415, "File type not supported"),
    (422, "File validation failed"),
    (500, "Server error occurred"),
    (502, "Service temporarily unavailable"),
    (503, "Service unavailable"),
];

// =============================================================================
// Development Server
// =============================================================================

/// Default host for the development config server
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default port for the development config server
pub const DEFAULT_SERVER_PORT: u16 = 8081;

/// Default allowed CORS origin for the development config server
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
