//! The in-memory document: ordered sections of ordered `key → value` entries.
//!
//! Insertion order matters because it is the order the serializer writes.
//! Sections are created explicitly through [`Document::section_or_insert`],
//! which the loader calls on each header and the persistence driver calls on
//! a write to a new section.  There is no public way to remove anything.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::format::error::FormatError;
use crate::format::{loader, serializer};

/// One named group of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// Overwriting keeps the key at its original position.
    pub(crate) fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key` without disturbing the order of the remaining keys.
    pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }
}

/// A whole configuration file held in memory.
///
/// # Examples
///
/// ```rust
/// use cfgkit_core::Document;
///
/// let doc: Document = "[header]\nproject: Programming Test\n".parse().unwrap();
/// assert_eq!(doc.get("header", "project"), Some("Programming Test"));
/// assert_eq!(doc.to_string(), "[header]\r\nproject: Programming Test\r\n\r\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section called `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns the value at `section` / `key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    /// Returns `true` if a section called `name` exists, even an empty one.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates `(name, section)` pairs in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Returns the section called `name`, appending an empty one if absent.
    pub(crate) fn section_or_insert(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub(crate) fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }
}

impl FromStr for Document {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        loader::parse_document(text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serializer::serialize(self))
    }
}
