//! Write-side checks for section names, keys and values.
//!
//! Anything accepted here is written by the serializer as a line the
//! classifier reads back to exactly the same name or value.

use super::classifier::{classify, LineKind};
use super::error::FormatError;
use super::serializer::push_entry;

fn has_line_break(text: &str) -> bool {
    text.contains(|c: char| c == '\n' || c == '\r')
}

fn is_representable_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !has_line_break(name)
}

/// Checks a section name before it is written.
///
/// # Errors
///
/// - [`FormatError::IllegalSectionName`] if `name` contains `[` or `]`.
/// - [`FormatError::UnrepresentableName`] if it is empty, padded with
///   whitespace, or contains a line break.
pub fn section_name(name: &str) -> Result<(), FormatError> {
    if name.contains(|c: char| c == '[' || c == ']') {
        return Err(FormatError::IllegalSectionName(name.to_string()));
    }
    if !is_representable_name(name) {
        return Err(FormatError::UnrepresentableName(name.to_string()));
    }
    Ok(())
}

/// Checks a key before it is written.
///
/// # Errors
///
/// - [`FormatError::IllegalKeyName`] if `key` contains `:`.
/// - [`FormatError::UnrepresentableName`] if it is empty, padded with
///   whitespace, or contains a line break.
pub fn key_name(key: &str) -> Result<(), FormatError> {
    if key.contains(':') {
        return Err(FormatError::IllegalKeyName(key.to_string()));
    }
    if !is_representable_name(key) {
        return Err(FormatError::UnrepresentableName(key.to_string()));
    }
    Ok(())
}

/// Checks a stringified value before it is written.  Empty values are fine.
///
/// # Errors
///
/// Returns [`FormatError::IllegalValue`] if `value` contains a line break or
/// starts or ends with whitespace.
pub fn value(value: &str) -> Result<(), FormatError> {
    if has_line_break(value) || value.trim() != value {
        return Err(FormatError::IllegalValue(value.to_string()));
    }
    Ok(())
}

/// Checks that the written `key: value` line reads back as the same entry.
///
/// Run after [`key_name`] and [`value`].  A key opening with `[` next to a
/// value closing with `]` renders as `[key: value]`, which is a section
/// header.
///
/// # Errors
///
/// Returns [`FormatError::UnrepresentableName`] with the key if the line
/// would be read back as anything else.
pub fn entry(key: &str, value: &str) -> Result<(), FormatError> {
    let mut line = String::with_capacity(key.len() + value.len() + 2);
    push_entry(&mut line, key, value);

    match classify(&line) {
        LineKind::Entry { key: k, value: v } if k == key && v == value => Ok(()),
        _ => Err(FormatError::UnrepresentableName(key.to_string())),
    }
}
