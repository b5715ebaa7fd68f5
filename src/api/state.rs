//! Development server state.

use std::sync::Arc;

use crate::config::ServerSettings;
use crate::domain::PublicConfig;

/// Shared state for the config server handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    pub fn new(settings: ServerSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// The document clients receive from `/public-config`.
    pub fn public_config(&self) -> PublicConfig {
        PublicConfig {
            max_size_mb: Some(self.settings.max_size_mb),
            supported_extensions: Some(self.settings.supported_extensions.clone()),
            supported_mime_types: Some(self.settings.supported_mime_types.clone()),
        }
    }
}
