//! Text format: continuation joiner, line classifier, loader and serializer.
//!
//! Reading runs in two passes.  [`joiner::join_continuations`] first folds
//! indented continuation lines into the line they continue, then
//! [`loader::parse_document`] classifies every resulting logical line with
//! [`classifier::classify`] and builds the [`crate::Document`].
//!
//! Writing is guarded by [`validate`], which refuses any name or value the
//! reader could not give back unchanged.  [`serializer::serialize`] then
//! renders every section and entry in insertion order with CRLF terminators.

pub mod classifier;
pub mod error;
pub mod joiner;
pub mod loader;
pub mod serializer;
pub mod validate;

pub use classifier::{classify, LineKind};
pub use error::FormatError;
pub use joiner::{join_continuations, LogicalLine};
pub use loader::parse_document;
pub use serializer::{serialize, LINE_TERMINATOR};
