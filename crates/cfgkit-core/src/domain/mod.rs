//! Domain types: the in-memory document and the lookup protocol.
//!
//! Nothing in here touches the file system; the document can be built,
//! queried and rendered entirely in memory.

pub mod document;
pub mod lookup;

pub use document::{Document, Section};
pub use lookup::{Lookup, LookupPart, SectionKey};
