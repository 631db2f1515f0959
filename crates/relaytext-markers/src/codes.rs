//! Marker syntax and escape constants.
//!
//! This module provides the raw characters and patterns that make up
//! the inline color marker syntax, plus the escape prefixes used when
//! rewriting markers into ANSI sequences.

/// Character that opens every color marker.
pub const MARKER_PREFIX: char = '§';

/// Every code character that may follow [`MARKER_PREFIX`].
pub const MARKER_ALPHABET: &str = "0123456789abcdefklmnor";

/// Regex pattern for marker runs: the prefix then any run of code
/// characters. Greedy, so `§cab` is a single match.
pub const MARKER_PATTERN: &str = "§[0-9a-fk-or]*";

/// Reserved separator, always removed by [`crate::strip`].
pub const SEPARATOR: char = '|';

/// Mention trigger, defused by [`crate::strip`].
pub const MENTION: char = '@';

/// What [`MENTION`] is rewritten to.
pub const MENTION_ESCAPED: &str = "@ ";

/// Escape prefix emitted by default in front of each color suffix.
///
/// Empty: output carries the bare `[31m` suffix, which renderers show
/// as-is. Use [`ESC`] for terminal-valid sequences.
pub const DEFAULT_ESCAPE_PREFIX: &str = "";

/// The real ANSI escape control character.
pub const ESC: &str = "\x1b";

/// Opening line of the markdown block produced by [`crate::mark_filter`].
pub const ANSI_FENCE_OPEN: &str = "```ansi\n";

/// Closing line of the markdown block produced by [`crate::mark_filter`].
pub const ANSI_FENCE_CLOSE: &str = "\n```";

/// Check whether `c` is a legal marker code character.
///
/// Lowercase only; `§C` is not a marker.
///
/// # Example
///
/// ```
/// use relaytext_markers::codes::is_marker_code;
/// assert!(is_marker_code('c'));
/// assert!(is_marker_code('8'));
/// assert!(!is_marker_code('C'));
/// assert!(!is_marker_code('g'));
/// ```
pub fn is_marker_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}
