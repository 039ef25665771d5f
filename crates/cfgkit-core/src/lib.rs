//! # cfgkit-core
//!
//! Parser, document model and write-through persistence for sectioned
//! `key: value` configuration files.
//!
//! This crate is used by the `cfgkit` command-line tool and can be embedded
//! directly by any application that keeps its settings in this format.
//!
//! # File format overview (for beginners)
//!
//! ```text
//! [section name]
//! key: value
//! key2: value continued
//!   onto next line
//!
//! [another section]
//! key: value
//! ```
//!
//! - A **section header** is a bracketed name on its own line.
//! - An **entry** is a `key: value` pair; the key ends at the first colon.
//! - A line that starts with whitespace **continues** the previous line.  Its
//!   indentation is kept verbatim, which is how long values are wrapped.
//! - Blank lines are ignored.  Anything else is a format error.
//!
//! # Architecture overview
//!
//! - **`domain`** – The in-memory [`Document`]: an ordered map of sections,
//!   each an ordered map of keys to string values.  Also home of the
//!   [`Lookup`] protocol that turns a one-entry `{section => key}` argument
//!   into a [`SectionKey`].
//!
//! - **`format`** – How text becomes a `Document` and back again: the
//!   continuation joiner, the line classifier, the loader that threads them
//!   together, and the CRLF serializer.
//!
//! - **`storage`** – Where the text lives.  [`Configuration`] owns a
//!   `Document` plus a [`ConfigStore`] and rewrites the whole store after
//!   every accepted write.

pub mod domain;
pub mod error;
pub mod format;
pub mod storage;

// Re-export the most-used types at the crate root so callers can write
// `cfgkit_core::Configuration` instead of `cfgkit_core::storage::configuration::Configuration`.
pub use domain::document::{Document, Section};
pub use domain::lookup::{Lookup, LookupPart, SectionKey};
pub use error::ConfigError;
pub use format::error::FormatError;
pub use format::loader::parse_document;
pub use format::serializer::serialize;
pub use storage::configuration::Configuration;
pub use storage::file::{FileStore, WriteStrategy};
pub use storage::{ConfigStore, StoreError};
