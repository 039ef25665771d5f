//! Line classifier for joined logical lines.
//!
//! Checks run in a fixed priority order, and the order is part of the format:
//!
//! 1. **Blank** – empty or whitespace only.
//! 2. **Section** – `[name]`, optionally followed by whitespace.  The name may
//!    not contain `]` and is trimmed.
//! 3. **Entry** – contains a `:`.  The key is everything before the first
//!    colon, the value everything after it, both trimmed.
//! 4. **Invalid** – anything else.
//!
//! Continuation lines never reach the classifier; the joiner has already
//! folded them away.

/// The shape of one logical line, borrowing its parts from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace.
    Blank,
    /// A section header; holds the trimmed section name.
    Section(&'a str),
    /// A `key: value` entry; both parts trimmed.
    Entry { key: &'a str, value: &'a str },
    /// Matches none of the above.
    Invalid,
}

/// Classifies a single logical line.
///
/// # Examples
///
/// ```rust
/// use cfgkit_core::format::{classify, LineKind};
///
/// assert_eq!(classify("[meta data]"), LineKind::Section("meta data"));
/// assert_eq!(
///     classify("project: Programming Test"),
///     LineKind::Entry { key: "project", value: "Programming Test" }
/// );
/// assert_eq!(classify("   "), LineKind::Blank);
/// assert_eq!(classify("no separator"), LineKind::Invalid);
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(name) = section_name(line) {
        return LineKind::Section(name);
    }
    if let Some((key, value)) = entry(line) {
        return LineKind::Entry { key, value };
    }
    LineKind::Invalid
}

fn section_name(line: &str) -> Option<&str> {
    let inner = line
        .trim_end()
        .strip_prefix('[')?
        .strip_suffix(']')?;

    if inner.contains(']') {
        return None;
    }

    let name = inner.trim();
    (!name.is_empty()).then_some(name)
}

fn entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value.trim()))
}
