//! Settings for the development config server.
//!
//! Mirrors the backend's upload settings: list values arrive as
//! comma-separated strings and are normalized before validation.

use std::env;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_MAX_SIZE_MB, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SUPPORTED_EXTENSIONS, DEFAULT_SUPPORTED_MIME_TYPES,
};
use crate::domain::unique_preserving_order;
use crate::errors::{AppError, AppResult};

/// Server-side settings exposed through `/public-config`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ServerSettings {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(exclusive_min = 0.0))]
    pub max_size_mb: f64,
    #[validate(length(min = 1))]
    pub supported_extensions: Vec<String>,
    #[validate(length(min = 1), custom(function = "validate_mime_types"))]
    pub supported_mime_types: Vec<String>,
    #[validate(custom(function = "validate_cors_origins"))]
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            supported_extensions: to_owned(DEFAULT_SUPPORTED_EXTENSIONS),
            supported_mime_types: to_owned(DEFAULT_SUPPORTED_MIME_TYPES),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerSettings {
    /// Load from `MAX_SIZE_MB`, `SUPPORTED_EXTENSIONS`, `SUPPORTED_MIME_TYPES`
    /// and `CORS_ORIGINS`, falling back to compiled-in defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup("MAX_SIZE_MB") {
            settings.max_size_mb = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|mb| mb.is_finite())
                .ok_or_else(|| {
                    AppError::validation(format!("MAX_SIZE_MB must be a finite number, got `{}`", raw))
                })?;
        }
        if let Some(raw) = lookup("SUPPORTED_EXTENSIONS") {
            settings.supported_extensions = normalize_extensions(&raw);
        }
        if let Some(raw) = lookup("SUPPORTED_MIME_TYPES") {
            settings.supported_mime_types = split_list(&raw);
        }
        if let Some(raw) = lookup("CORS_ORIGINS") {
            settings.cors_origins = split_list(&raw);
        }

        settings.validated()
    }

    /// Override the bind address (CLI flags take precedence over env).
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Run field validation and return the settings on success.
    pub fn validated(self) -> AppResult<Self> {
        self.validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        Ok(self)
    }

    /// Bind address, e.g. `127.0.0.1:8081`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Split a comma-separated value, trimming entries and dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    unique_preserving_order(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    )
}

fn normalize_extensions(raw: &str) -> Vec<String> {
    unique_preserving_order(
        raw.split(',')
            .map(|s| s.trim().to_lowercase())
            .map(|s| s.trim_start_matches('.').to_string())
            .filter(|s| !s.is_empty()),
    )
}

fn validate_mime_types(mime_types: &[String]) -> Result<(), ValidationError> {
    if mime_types.iter().all(|m| m.contains('/')) {
        Ok(())
    } else {
        Err(ValidationError::new("mime_format")
            .with_message("MIME types must look like `type/subtype`".into()))
    }
}

fn validate_cors_origins(origins: &[String]) -> Result<(), ValidationError> {
    let valid = origins
        .iter()
        .all(|o| o == "*" || o.starts_with("http://") || o.starts_with("https://"));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("cors_origin")
            .with_message("CORS origins must be `*` or start with http:// or https://".into()))
    }
}

/// Format validation errors into a single readable string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| format!("{}: {}", field, m))
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |k| {
            pairs
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_are_valid() {
        let settings = ServerSettings::from_lookup(vars(&[])).unwrap();
        assert_eq!(settings.max_size_mb, 10.0);
        assert_eq!(settings.supported_extensions, ["pdf", "doc", "docx", "txt"]);
        assert_eq!(settings.addr(), "127.0.0.1:8081");
    }

    #[test]
    fn extensions_are_normalized() {
        let settings = ServerSettings::from_lookup(vars(&[(
            "SUPPORTED_EXTENSIONS",
            " .PDF, pdf ,,Docx ",
        )]))
        .unwrap();
        assert_eq!(settings.supported_extensions, ["pdf", "docx"]);
    }

    #[test]
    fn malformed_mime_type_is_rejected() {
        let err = ServerSettings::from_lookup(vars(&[(
            "SUPPORTED_MIME_TYPES",
            "application/pdf, plaintext",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("type/subtype"));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let err = ServerSettings::from_lookup(vars(&[("MAX_SIZE_MB", "0")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn infinite_size_is_rejected() {
        for raw in ["inf", "infinity", "NaN"] {
            let err = ServerSettings::from_lookup(|k| (k == "MAX_SIZE_MB").then(|| raw.to_string()))
                .unwrap_err();
            assert!(err.to_string().contains("finite"), "{}: {}", raw, err);
        }
    }

    #[test]
    fn bad_cors_origin_is_rejected() {
        let err =
            ServerSettings::from_lookup(vars(&[("CORS_ORIGINS", "localhost:5173")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn port_zero_is_rejected() {
        let err = ServerSettings::default().with_addr("0.0.0.0", 0).validated().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
