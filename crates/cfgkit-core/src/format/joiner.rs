//! Continuation joiner: folds indented lines into the line they continue.
//!
//! A line that starts with whitespace continues the previous logical line.
//! The continuation is appended after trimming only its *trailing*
//! whitespace, so its indentation becomes part of the joined value and no
//! separator is inserted:
//!
//! ```text
//! description: the Lonely Planet      →  description: the Lonely Planet  programming test
//!   programming test
//! ```

use super::error::FormatError;

/// One logical line: a physical line plus any continuation lines folded into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line this logical line starts on.
    pub number: usize,
    /// The joined text.
    pub text: String,
}

impl LogicalLine {
    fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Returns `true` for lines shaped like a continuation: leading whitespace
/// followed by at least one non-whitespace character.
pub fn is_continuation(line: &str) -> bool {
    starts_indented(line) && !line.trim_start().is_empty()
}

/// Empty lines count as indented so that, once joining is active, blank lines
/// fold harmlessly into the previous logical line.
fn starts_indented(line: &str) -> bool {
    line.chars().next().map_or(true, char::is_whitespace)
}

/// Joins continuation lines into the logical line they continue.
///
/// When no line is continuation-shaped the input is returned unchanged, one
/// logical line per physical line.  Otherwise every non-indented line starts
/// a new logical line (trimmed on both sides) and every indented line is
/// appended, trailing-trimmed, to the last one.
///
/// # Errors
///
/// Returns [`FormatError::LeadingContinuation`] if the first non-blank line is
/// indented, since there is no earlier line for it to continue.
///
/// # Examples
///
/// ```rust
/// use cfgkit_core::format::join_continuations;
///
/// let joined = join_continuations(["key: one", "  two"]).unwrap();
/// assert_eq!(joined.len(), 1);
/// assert_eq!(joined[0].text, "key: one  two");
/// ```
pub fn join_continuations<'a, I>(lines: I) -> Result<Vec<LogicalLine>, FormatError>
where
    I: IntoIterator<Item = &'a str>,
{
    let lines: Vec<&str> = lines.into_iter().collect();

    if !lines.iter().any(|line| is_continuation(line)) {
        return Ok(lines
            .iter()
            .enumerate()
            .map(|(i, line)| LogicalLine::new(i + 1, *line))
            .collect());
    }

    let mut joined: Vec<LogicalLine> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let number = i + 1;

        if !starts_indented(line) {
            joined.push(LogicalLine::new(number, line.trim()));
            continue;
        }

        let tail = line.trim_end();
        match joined.last_mut() {
            Some(last) => last.text.push_str(tail),
            // Blank lines before the first logical line carry nothing.
            None if tail.is_empty() => {}
            None => {
                return Err(FormatError::LeadingContinuation {
                    line: number,
                    text: (*line).to_string(),
                })
            }
        }
    }

    Ok(joined)
}
