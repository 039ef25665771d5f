//! Loader: runs the joiner and classifier over file text to build a [`Document`].

use tracing::trace;

use super::classifier::{classify, LineKind};
use super::error::FormatError;
use super::joiner::join_continuations;
use crate::domain::document::Document;

/// Parses file text into a [`Document`].
///
/// Both `\n` and `\r\n` line terminators are accepted.  Parsing stops at the
/// first offending line; no partial document is returned.
///
/// # Errors
///
/// - [`FormatError::LeadingContinuation`] if the first non-blank line is indented.
/// - [`FormatError::MissingSection`] if an entry precedes every section header.
/// - [`FormatError::InvalidLine`] for a line of no recognised shape.
///
/// # Examples
///
/// ```rust
/// use cfgkit_core::parse_document;
///
/// let doc = parse_document("[planet]\r\nname: lonely\r\n\r\n").unwrap();
/// assert_eq!(doc.get("planet", "name"), Some("lonely"));
///
/// assert!(parse_document("name: lonely\n").is_err());
/// ```
pub fn parse_document(text: &str) -> Result<Document, FormatError> {
    let lines = join_continuations(text.lines())?;

    let mut document = Document::new();
    let mut current_section: Option<&str> = None;

    for line in &lines {
        let kind = classify(&line.text);
        trace!(line = line.number, ?kind, "classified line");

        match kind {
            LineKind::Blank => {}
            LineKind::Section(name) => {
                document.section_or_insert(name);
                current_section = Some(name);
            }
            LineKind::Entry { key, value } => {
                let section = current_section.ok_or_else(|| FormatError::MissingSection {
                    line: line.number,
                    text: line.text.clone(),
                })?;
                document.section_or_insert(section).insert(key, value);
            }
            LineKind::Invalid => {
                return Err(FormatError::InvalidLine {
                    line: line.number,
                    text: line.text.clone(),
                })
            }
        }
    }

    Ok(document)
}
