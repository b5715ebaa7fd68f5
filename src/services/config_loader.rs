//! Config loader - Best-effort enrichment of the registry from the backend.
//!
//! Fail-open: every failure is logged and the registry keeps whatever it
//! held before the call. The remote document is an optimization, never a
//! dependency.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::{AppliedFields, PublicConfig, Registry};
use crate::errors::{AppError, AppResult};
use crate::infra::{AbortSignal, HttpConfigSource, PublicConfigSource};

/// What a load attempt did to the registry.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No transport available; nothing was requested.
    Skipped,
    /// The document validated and these fields were merged.
    Applied(AppliedFields),
    /// The fetch or validation failed; the registry is untouched.
    KeptDefaults(AppError),
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied(_))
    }
}

/// Fetches, validates and applies the public config.
#[derive(Clone)]
pub struct ConfigLoader {
    source: Option<Arc<dyn PublicConfigSource>>,
    timeout: Duration,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("detached", &self.source.is_none())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ConfigLoader {
    pub fn new(source: Arc<dyn PublicConfigSource>, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            timeout,
        }
    }

    /// HTTP-backed loader for the configured API.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let source = HttpConfigSource::new(config)?;
        Ok(Self::new(Arc::new(source), config.config_fetch_timeout))
    }

    /// A loader with no transport, for headless or offline runs.
    pub fn detached() -> Self {
        Self {
            source: None,
            timeout: Duration::ZERO,
        }
    }

    /// Fetch the public config once and merge it into `registry`.
    ///
    /// When `abort` is given it replaces the internal timeout. Never fails;
    /// the returned outcome is informational.
    pub async fn load_backend_constraints(
        &self,
        registry: &Registry,
        abort: Option<AbortSignal>,
    ) -> LoadOutcome {
        let Some(source) = &self.source else {
            tracing::debug!("No config transport available, skipping public config");
            return LoadOutcome::Skipped;
        };

        match self.fetch_validated(source.as_ref(), abort).await {
            Ok(cfg) => {
                let applied = registry.apply(&cfg);
                tracing::info!(
                    max_size = applied.max_size,
                    extensions = applied.extensions,
                    mime_types = applied.mime_types,
                    "Public config applied"
                );
                LoadOutcome::Applied(applied)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Using default file constraints; could not load public config"
                );
                LoadOutcome::KeptDefaults(e)
            }
        }
    }

    async fn fetch_validated(
        &self,
        source: &dyn PublicConfigSource,
        abort: Option<AbortSignal>,
    ) -> AppResult<PublicConfig> {
        let document = match abort {
            Some(signal) => {
                // Abort is polled first so an already-fired signal always wins.
                tokio::select! {
                    biased;
                    _ = signal.aborted() => return Err(AppError::Aborted),
                    result = source.fetch() => result?,
                }
            }
            None => tokio::time::timeout(self.timeout, source.fetch())
                .await
                .map_err(|_| AppError::Timeout)??,
        };

        PublicConfig::from_json(&document).map_err(AppError::InvalidConfig)
    }
}
