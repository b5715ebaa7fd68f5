//! Client settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    CONFIG_FETCH_TIMEOUT_MS, ENV_API_BASE_URL, ENV_CONFIG_FETCH_TIMEOUT_MS,
    ENV_NETWORK_TIMEOUT_MS, NETWORK_TIMEOUT_MS, PUBLIC_CONFIG_PATH,
};
use super::env::{optional_env_with, require_env_with};
use super::timing::Timing;
use crate::errors::{AppError, AppResult};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend API base URL, without a trailing slash
    pub api_base_url: String,
    pub config_fetch_timeout: Duration,
    pub network_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Errors
    /// Fails if `CLIENT_API_BASE_URL` is missing or a timeout override is not
    /// a positive integer.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = require_env_with(ENV_API_BASE_URL, &lookup)?;
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(AppError::InvalidEnv {
                key: ENV_API_BASE_URL.to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            config_fetch_timeout: timeout_override(
                ENV_CONFIG_FETCH_TIMEOUT_MS,
                &lookup,
                CONFIG_FETCH_TIMEOUT_MS,
            )?,
            network_timeout: timeout_override(ENV_NETWORK_TIMEOUT_MS, &lookup, NETWORK_TIMEOUT_MS)?,
        })
    }

    /// Default timing with this configuration's timeout overrides applied.
    pub fn timing(&self) -> Timing {
        Timing {
            network_timeout: self.network_timeout,
            config_fetch_timeout: self.config_fetch_timeout,
            ..Timing::default()
        }
    }

    /// Full URL of the public config document.
    pub fn public_config_url(&self) -> String {
        format!("{}{}", self.api_base_url, PUBLIC_CONFIG_PATH)
    }
}

fn timeout_override<F>(key: &str, lookup: F, default_ms: u64) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = optional_env_with(key, lookup)? else {
        return Ok(Duration::from_millis(default_ms));
    };

    match raw.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(AppError::InvalidEnv {
            key: key.to_string(),
            reason: format!("expected a positive number of milliseconds, got `{}`", raw),
        }),
    }
}
