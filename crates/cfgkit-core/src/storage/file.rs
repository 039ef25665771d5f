//! File-backed [`ConfigStore`].
//!
//! Two write strategies are available:
//!
//! - [`WriteStrategy::InPlace`] (default) truncates the file and writes the
//!   new text into it.  A crash mid-write can leave a truncated file.
//! - [`WriteStrategy::Atomic`] writes a temporary file in the same directory
//!   and renames it over the target, so readers see either the old or the new
//!   text, never a mix.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{ConfigStore, StoreError};

/// How [`FileStore::save`](ConfigStore::save) replaces the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Truncate and overwrite the file itself.
    #[default]
    InPlace,
    /// Write a sibling temporary file, then rename it over the target.
    Atomic,
}

/// A configuration file on the local file system.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    strategy: WriteStrategy,
}

impl FileStore {
    /// Creates a store for `path` using [`WriteStrategy::InPlace`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strategy: WriteStrategy::default(),
        }
    }

    /// Returns the store with its write strategy replaced.
    pub fn with_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn strategy(&self) -> WriteStrategy {
        self.strategy
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Directory that holds the file; `.` for a bare file name.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn save_atomic(&self, contents: &str) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        let mut tmp = NamedTempFile::new_in(dir).map_err(Self::io_error(dir))?;
        tmp.write_all(contents.as_bytes())
            .map_err(Self::io_error(tmp.path()))?;
        tmp.as_file()
            .sync_all()
            .map_err(Self::io_error(tmp.path()))?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<String, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(Self::io_error(&self.path))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read config file");
        Ok(text)
    }

    /// Creates the parent directory if needed, then replaces the file.
    fn save(&self, contents: &str) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(Self::io_error(dir))?;

        match self.strategy {
            WriteStrategy::InPlace => {
                fs::write(&self.path, contents).map_err(Self::io_error(&self.path))?
            }
            WriteStrategy::Atomic => self.save_atomic(contents)?,
        }

        debug!(
            path = %self.path.display(),
            bytes = contents.len(),
            strategy = ?self.strategy,
            "wrote config file"
        );
        Ok(())
    }
}
