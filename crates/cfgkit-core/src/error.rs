//! Crate-level error type returned by every [`crate::Configuration`] operation.

use thiserror::Error;

use crate::format::error::FormatError;
use crate::storage::StoreError;

/// Errors surfaced at the public boundary of the crate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file content is malformed, or a write supplied an illegal name or value.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The lookup argument was not exactly one `{section => key}` pair.
    #[error(r#"expected lookup by {{"section" => "key"}}"#)]
    LookupShape,

    /// The requested section does not exist.
    #[error("section not found: {0:?}")]
    SectionNotFound(String),

    /// The section exists but has no such key.
    #[error("key {key:?} not found in section {section:?}")]
    KeyNotFound { section: String, key: String },

    /// Reading or writing the backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ConfigError {
    /// Returns `true` for the two not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::SectionNotFound(_) | ConfigError::KeyNotFound { .. }
        )
    }
}
