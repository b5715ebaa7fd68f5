//! API layer - Development config server
//!
//! Serves `/public-config` from [`ServerSettings`](crate::config::ServerSettings)
//! so the client loader can be exercised end to end.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
