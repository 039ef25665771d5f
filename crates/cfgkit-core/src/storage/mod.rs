//! Storage: where configuration text lives and how it is rewritten.
//!
//! [`ConfigStore`] is the seam between the persistence driver
//! ([`configuration::Configuration`]) and the medium holding the text.  The
//! production implementation is [`file::FileStore`]; tests substitute a mock.
//!
//! Every save replaces the *whole* stored text.  There is no append, patch,
//! lock or conflict detection: two writers on the same file race, and the
//! last save wins.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod configuration;
pub mod file;

pub use configuration::Configuration;
pub use file::{FileStore, WriteStrategy};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temporary file of an atomic write could not replace the target.
    #[error("failed to replace config at {} with temporary file: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Returns `true` if the store has no content yet (file not found).
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Backing medium for a [`Configuration`].
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Reads the complete stored text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the text cannot be read; a store with no
    /// content yet reports an error for which [`StoreError::is_not_found`]
    /// is `true`.
    fn load(&self) -> Result<String, StoreError>;

    /// Replaces the complete stored text with `contents`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the text cannot be written.
    fn save(&self, contents: &str) -> Result<(), StoreError>;
}
