//! Service container - The application root's handles.
//!
//! Owns the registry, the config loader and the toast notifier, and hands
//! them out as cheap clones. Consumers get the registry through
//! [`Services::registry`]; only [`Services::load_constraints`] writes to it.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::{ConfigLoader, LoadOutcome, Toaster};
use crate::config::{Config, Timing};
use crate::domain::Registry;
use crate::errors::AppResult;
use crate::infra::AbortSignal;

/// Everything the client needs after startup.
#[derive(Debug, Clone)]
pub struct Services {
    registry: Arc<Registry>,
    loader: ConfigLoader,
    toaster: Toaster,
}

impl Services {
    pub fn new(registry: Arc<Registry>, loader: ConfigLoader, toaster: Toaster) -> Self {
        Self {
            registry,
            loader,
            toaster,
        }
    }

    /// Wire the HTTP-backed loader from validated configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            Arc::new(Registry::new()),
            ConfigLoader::from_config(config)?,
            Toaster::new(&config.timing()),
        ))
    }

    /// Same wiring without a transport; the registry keeps its defaults.
    pub fn offline(timing: Timing) -> Self {
        Self::new(
            Arc::new(Registry::new()),
            ConfigLoader::detached(),
            Toaster::new(&timing),
        )
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub fn toaster(&self) -> Toaster {
        self.toaster.clone()
    }

    /// Run the loader and wait for it.
    pub async fn load_constraints(&self, abort: Option<AbortSignal>) -> LoadOutcome {
        self.loader
            .load_backend_constraints(&self.registry, abort)
            .await
    }

    /// Start the loader in the background so startup is not blocked.
    ///
    /// Readers that do not await the handle may see defaults or overrides.
    pub fn spawn_constraint_load(&self) -> JoinHandle<LoadOutcome> {
        let services = self.clone();
        tokio::spawn(async move { services.load_constraints(None).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockPublicConfigSource;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn offline_services_keep_defaults() {
        let services = Services::offline(Timing::default());
        let outcome = services.load_constraints(None).await;

        assert!(matches!(outcome, LoadOutcome::Skipped));
        assert_eq!(services.registry().max_size_mb(), 10.0);
    }

    #[tokio::test]
    async fn background_load_is_visible_after_join() {
        let mut source = MockPublicConfigSource::new();
        source
            .expect_fetch()
            .returning(|| Ok(json!({ "supportedMimeTypes": ["application/pdf"] })));

        let services = Services::new(
            Arc::new(Registry::new()),
            ConfigLoader::new(Arc::new(source), Duration::from_secs(1)),
            Toaster::default(),
        );

        let outcome = services.spawn_constraint_load().await.unwrap();

        assert!(outcome.is_applied());
        assert_eq!(services.registry().supported_mime_types(), ["application/pdf"]);
    }
}
