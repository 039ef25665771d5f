//! Serializer: renders a [`Document`] back to file text.
//!
//! Output layout, regardless of platform:
//!
//! ```text
//! [section]\r\n
//! key: value\r\n
//! \r\n
//! ```
//!
//! Sections and keys are written in insertion order.  Values are written on a
//! single line; continuation wrapping is never produced.

use crate::domain::document::Document;

/// Line terminator used for every line written.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Renders `document` as one text blob ready to overwrite a file.
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();

    for (name, section) in document.sections() {
        out.push('[');
        out.push_str(name);
        out.push(']');
        out.push_str(LINE_TERMINATOR);

        for (key, value) in section.entries() {
            push_entry(&mut out, key, value);
            out.push_str(LINE_TERMINATOR);
        }

        out.push_str(LINE_TERMINATOR);
    }

    out
}

/// Appends one `key: value` line, without its terminator.
pub(crate) fn push_entry(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
}
