//! Write-through persistence driver.
//!
//! A [`Configuration`] loads its whole store eagerly when constructed, answers
//! reads from memory, and rewrites the whole store after every accepted write.
//! Writes are validate-then-commit: a rejected write touches neither memory
//! nor the store, and a write whose save fails is rolled back in memory, so
//! the document always equals what the store last accepted.
//!
//! # Example
//!
//! ```rust,no_run
//! use cfgkit_core::Configuration;
//!
//! # fn main() -> Result<(), cfgkit_core::ConfigError> {
//! let mut config = Configuration::open("example.cfg")?;
//! println!("{}", config.get(("header", "project"))?);
//!
//! config.set(("constants", "pi"), 3.14159)?;
//! assert_eq!(config.get(("constants", "pi"))?, "3.14159");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::FileStore;
use super::ConfigStore;
use crate::domain::document::Document;
use crate::domain::lookup::{Lookup, SectionKey};
use crate::error::ConfigError;
use crate::format::{parse_document, serialize, validate};

/// A configuration document bound to the store it was loaded from.
#[derive(Debug)]
pub struct Configuration<S = FileStore> {
    store: S,
    document: Document,
}

impl Configuration<FileStore> {
    /// Loads and validates the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Store`] if the file cannot be read (including when it
    ///   does not exist).
    /// - [`ConfigError::Format`] on the first malformed line.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::with_store(FileStore::new(path))
    }

    /// Like [`open`](Self::open), but starts from an empty document when the
    /// file does not exist yet.  The file is created by the first write.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open), except that a missing file is not an error.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::with_store_or_empty(FileStore::new(path))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: ConfigStore> Configuration<S> {
    /// Loads and validates the text held by `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be read, or
    /// [`ConfigError::Format`] if its text is malformed.
    pub fn with_store(store: S) -> Result<Self, ConfigError> {
        let text = store.load()?;
        Self::from_text(store, &text)
    }

    /// Loads `store`, treating a not-found store as an empty document.
    ///
    /// # Errors
    ///
    /// As [`with_store`](Self::with_store), minus the not-found case.
    pub fn with_store_or_empty(store: S) -> Result<Self, ConfigError> {
        match store.load() {
            Ok(text) => Self::from_text(store, &text),
            Err(e) if e.is_not_found() => {
                debug!("config store is empty; starting from an empty document");
                Ok(Self {
                    store,
                    document: Document::new(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn from_text(store: S, text: &str) -> Result<Self, ConfigError> {
        let document = parse_document(text)?;
        debug!(
            sections = document.len(),
            entries = document.entry_count(),
            "loaded configuration"
        );
        Ok(Self { store, document })
    }

    /// Returns the value addressed by `lookup`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::LookupShape`] if `lookup` is not one `{section => key}` pair.
    /// - [`ConfigError::SectionNotFound`] / [`ConfigError::KeyNotFound`] if absent.
    pub fn get<L: Lookup>(&self, lookup: L) -> Result<&str, ConfigError> {
        let SectionKey { section, key } = lookup.section_key()?;

        let Some(entries) = self.document.section(&section) else {
            return Err(ConfigError::SectionNotFound(section));
        };
        match entries.get(&key) {
            Some(value) => Ok(value),
            None => Err(ConfigError::KeyNotFound { section, key }),
        }
    }

    /// Stores the string form of `value` at `lookup`, creating the section if
    /// needed, then rewrites the whole store.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::LookupShape`] if `lookup` is not one `{section => key}` pair.
    /// - [`ConfigError::Format`] if the section name contains `[`/`]`, the key
    ///   contains `:`, or a name or value could not be read back unchanged.
    /// - [`ConfigError::Store`] if saving fails; the document is left as it was.
    pub fn set<L, V>(&mut self, lookup: L, value: V) -> Result<(), ConfigError>
    where
        L: Lookup,
        V: fmt::Display,
    {
        let SectionKey { section, key } = lookup.section_key()?;
        validate::section_name(&section)?;
        validate::key_name(&key)?;
        let value = value.to_string();
        validate::value(&value)?;
        validate::entry(&key, &value)?;

        let section_existed = self.document.contains_section(&section);
        let previous = self
            .document
            .section_or_insert(&section)
            .insert(key.as_str(), value);

        if let Err(e) = self.persist() {
            self.rollback(&section, &key, section_existed, previous);
            return Err(e);
        }
        Ok(())
    }

    /// Re-reads the store.  The current document is kept if the new text is
    /// unreadable or malformed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] or [`ConfigError::Format`] as for
    /// [`with_store`](Self::with_store).
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let text = self.store.load()?;
        self.document = parse_document(&text)?;
        debug!(sections = self.document.len(), "reloaded configuration");
        Ok(())
    }

    /// The in-memory document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the configuration, keeping only its document.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn persist(&self) -> Result<(), ConfigError> {
        let text = serialize(&self.document);
        self.store.save(&text)?;
        debug!(
            sections = self.document.len(),
            bytes = text.len(),
            "persisted configuration"
        );
        Ok(())
    }

    fn rollback(
        &mut self,
        section: &str,
        key: &str,
        section_existed: bool,
        previous: Option<String>,
    ) {
        if !section_existed {
            self.document.remove_section(section);
            return;
        }
        let entries = self.document.section_or_insert(section);
        match previous {
            Some(old) => {
                entries.insert(key, old);
            }
            None => {
                entries.remove(key);
            }
        }
    }
}
