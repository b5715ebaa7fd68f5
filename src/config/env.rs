//! Startup environment access.
//!
//! Client variables follow the `CLIENT_<NAME>` convention and are read once
//! during initialization. A missing or blank variable is a fatal startup
//! error; there is nothing to retry.

use std::env;

use super::constants::{CLIENT_ENV_PREFIX, ENV_EXAMPLE_VALUE};
use crate::errors::{AppError, AppResult};

/// Read a required client variable from the process environment.
///
/// Returns the trimmed value.
///
/// # Errors
/// `InvalidEnvKey` if `key` does not follow the `CLIENT_` convention,
/// `MissingEnv` if the variable is unset or blank.
pub fn require_env(key: &str) -> AppResult<String> {
    require_env_with(key, |k| env::var(k).ok())
}

/// Same as [`require_env`] but resolves values through `lookup`.
pub fn require_env_with<F>(key: &str, lookup: F) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    validate_key(key)?;

    match lookup(key).map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingEnv {
            key: key.to_string(),
            example: ENV_EXAMPLE_VALUE.to_string(),
        }),
    }
}

/// Read an optional client variable, treating blank values as absent.
pub fn optional_env_with<F>(key: &str, lookup: F) -> AppResult<Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    validate_key(key)?;
    Ok(lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn validate_key(key: &str) -> AppResult<()> {
    let ident = key.strip_prefix(CLIENT_ENV_PREFIX).unwrap_or_default();
    let well_formed = !ident.is_empty()
        && ident
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(AppError::InvalidEnvKey(key.to_string()))
    }
}
