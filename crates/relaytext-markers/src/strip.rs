//! Marker removal.

use regex::Regex;
use std::sync::LazyLock;

use crate::codes::{MARKER_PATTERN, MENTION, MENTION_ESCAPED, SEPARATOR};

/// Compiled regex for [`MARKER_PATTERN`].
pub(crate) static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(MARKER_PATTERN).unwrap());

/// Remove every color marker from `text`.
///
/// Marker runs (`§` then any run of code characters) and every `|` are
/// deleted. With `trim`, surrounding whitespace goes next. Finally each
/// `@` becomes `@ ` so the text cannot ping anyone downstream.
///
/// # Example
///
/// ```
/// use relaytext_markers::strip;
///
/// assert_eq!(strip("§cHello §lWorld", true), "Hello World");
/// assert_eq!(strip("  §ahi  ", false), "  hi  ");
/// assert_eq!(strip("a@b", true), "a@ b");
/// ```
pub fn strip(text: &str, trim: bool) -> String {
    let without_markers = MARKER_RE.replace_all(text, "");
    let mut result = without_markers.replace(SEPARATOR, "");

    if trim {
        result = result.trim_matches(is_trimmed).to_string();
    }

    result.replace(MENTION, MENTION_ESCAPED)
}

/// Unicode whitespace plus the ASCII information separators
/// (`\x1c`..=`\x1f`), which chat logs use as field breaks.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
