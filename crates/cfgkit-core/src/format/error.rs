//! Format errors raised while reading a file or validating a write.

use thiserror::Error;

/// Errors caused by malformed file content or by names and values that cannot
/// be written back to the file format.
///
/// Read-side variants carry the 1-based number of the physical line where the
/// offending logical line started.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// An entry appeared before any section header.
    #[error("line {line}: config file must start with a [section name], not {text:?}")]
    MissingSection { line: usize, text: String },

    /// The line is neither blank, a section header, nor a `key: value` entry.
    #[error("line {line}: encountered an invalid line: {text:?}")]
    InvalidLine { line: usize, text: String },

    /// The first non-blank line is indented, so there is nothing to continue.
    #[error("line {line}: illegal whitespace at the beginning of the first non-blank line: {text:?}")]
    LeadingContinuation { line: usize, text: String },

    /// A write supplied a section name containing `[` or `]`.
    #[error("section name cannot contain [] brackets: {0:?}")]
    IllegalSectionName(String),

    /// A write supplied a key containing `:`.
    #[error("key name cannot contain the : colon character: {0:?}")]
    IllegalKeyName(String),

    /// A write supplied a section name or key that would not survive a reload:
    /// empty, padded with whitespace, or spanning several lines.
    #[error("name cannot be represented in a config file: {0:?}")]
    UnrepresentableName(String),

    /// A write supplied a value that would not survive a reload: one that
    /// spans several lines or carries surrounding whitespace.
    #[error("value cannot contain line breaks or surrounding whitespace: {0:?}")]
    IllegalValue(String),
}

impl FormatError {
    /// The physical line number for read-side errors, `None` for write-side ones.
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::MissingSection { line, .. }
            | FormatError::InvalidLine { line, .. }
            | FormatError::LeadingContinuation { line, .. } => Some(*line),
            FormatError::IllegalSectionName(_)
            | FormatError::IllegalKeyName(_)
            | FormatError::UnrepresentableName(_)
            | FormatError::IllegalValue(_) => None,
        }
    }
}
