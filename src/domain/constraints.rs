//! File constraints and the registry that owns them.
//!
//! The registry is created once by the application root with compiled-in
//! defaults and handed out as `Arc<Registry>`. Only the config loader calls
//! [`Registry::apply`]; every other component reads. Mutation happens at most
//! once, early, so readers that did not await the loader may observe either
//! the defaults or the overrides. That race is accepted: the values only
//! shape user-facing hints.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use super::messages;
use super::public_config::PublicConfig;
use crate::config::{
    BYTES_PER_MB, DEFAULT_MAX_SIZE_MB, DEFAULT_SUPPORTED_EXTENSIONS,
    DEFAULT_SUPPORTED_MIME_TYPES,
};

/// Upload limits advertised to the user.
///
/// `max_size_mb` may be fractional. [`max_size_bytes`](Self::max_size_bytes)
/// floors the product to whole bytes, so it equals `max_size_mb × 1 048 576`
/// exactly only when that product is an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileConstraints {
    max_size_mb: f64,
    supported_extensions: Vec<String>,
    supported_mime_types: Vec<String>,
}

impl Default for FileConstraints {
    fn default() -> Self {
        Self {
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            supported_extensions: DEFAULT_SUPPORTED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            supported_mime_types: DEFAULT_SUPPORTED_MIME_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FileConstraints {
    pub fn max_size_mb(&self) -> f64 {
        self.max_size_mb
    }

    /// `max_size_mb × 1 048 576`, rounded down to whole bytes.
    pub fn max_size_bytes(&self) -> u64 {
        (self.max_size_mb * BYTES_PER_MB as f64) as u64
    }

    pub fn supported_extensions(&self) -> &[String] {
        &self.supported_extensions
    }

    pub fn supported_mime_types(&self) -> &[String] {
        &self.supported_mime_types
    }

    /// Merge accepted override fields; absent or empty fields keep the
    /// current value.
    pub fn merge(&mut self, cfg: &PublicConfig) -> AppliedFields {
        let mut applied = AppliedFields::default();

        if let Some(mb) = cfg.max_size_mb.filter(|mb| mb.is_finite() && *mb > 0.0) {
            self.max_size_mb = mb;
            applied.max_size = true;
        }

        if let Some(exts) = &cfg.supported_extensions {
            let exts = unique_preserving_order(
                exts.iter()
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty()),
            );
            if !exts.is_empty() {
                self.supported_extensions = exts;
                applied.extensions = true;
            }
        }

        if let Some(mimes) = &cfg.supported_mime_types {
            let mimes = unique_preserving_order(
                mimes
                    .iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
            );
            if !mimes.is_empty() {
                self.supported_mime_types = mimes;
                applied.mime_types = true;
            }
        }

        applied
    }
}

/// Which fields an override actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedFields {
    pub max_size: bool,
    pub extensions: bool,
    pub mime_types: bool,
}

impl AppliedFields {
    pub fn any(&self) -> bool {
        self.max_size || self.extensions || self.mime_types
    }
}

/// Deduplicate while keeping the first occurrence of each value.
pub fn unique_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Process-wide constants owned by the application root.
#[derive(Debug, Default)]
pub struct Registry {
    constraints: RwLock<FileConstraints>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current constraints.
    pub fn constraints(&self) -> FileConstraints {
        self.constraints
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn max_size_mb(&self) -> f64 {
        self.read(FileConstraints::max_size_mb)
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.read(FileConstraints::max_size_bytes)
    }

    pub fn supported_extensions(&self) -> Vec<String> {
        self.read(|c| c.supported_extensions.clone())
    }

    pub fn supported_mime_types(&self) -> Vec<String> {
        self.read(|c| c.supported_mime_types.clone())
    }

    /// Oversized-file message quoting the limit in effect right now.
    pub fn oversized_message(&self, size_label: &str) -> String {
        messages::error::file::validation::oversized(size_label, self.max_size_mb())
    }

    /// The single update entry point. Called by the config loader only.
    pub fn apply(&self, cfg: &PublicConfig) -> AppliedFields {
        self.constraints
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(cfg)
    }

    fn read<T>(&self, f: impl FnOnce(&FileConstraints) -> T) -> T {
        let guard = self.constraints.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}
