//! Marker to ANSI translation.
//!
//! Color markers become SGR foreground suffixes, style markers vanish,
//! and anything left over that still looks like a marker is removed.

use crate::codes::{ANSI_FENCE_CLOSE, ANSI_FENCE_OPEN, DEFAULT_ESCAPE_PREFIX, ESC};
use crate::strip::MARKER_RE;
use crate::table::MarkerCode;

/// Order in which table entries are substituted: colors first, then
/// styles. Deleting a style marker can expose a new `§x` pair; pairs for
/// codes already substituted are left to the cleanup pass.
const SUBSTITUTION_ORDER: [MarkerCode; 21] = [
    MarkerCode::Black,
    MarkerCode::DarkBlue,
    MarkerCode::DarkGreen,
    MarkerCode::DarkAqua,
    MarkerCode::DarkRed,
    MarkerCode::DarkPurple,
    MarkerCode::Gold,
    MarkerCode::Gray,
    MarkerCode::Blue,
    MarkerCode::Green,
    MarkerCode::Aqua,
    MarkerCode::Red,
    MarkerCode::LightPurple,
    MarkerCode::Yellow,
    MarkerCode::White,
    MarkerCode::Bold,
    MarkerCode::Obfuscated,
    MarkerCode::Strikethrough,
    MarkerCode::Underline,
    MarkerCode::Italic,
    MarkerCode::Reset,
];

/// Rewrites markers into ANSI sequences using a fixed escape prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    escape_prefix: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Translator using [`DEFAULT_ESCAPE_PREFIX`] (empty).
    pub fn new() -> Self {
        Self::with_escape_prefix(DEFAULT_ESCAPE_PREFIX)
    }

    /// Translator emitting terminal-valid sequences (`\x1b[31m`).
    pub fn real_ansi() -> Self {
        Self::with_escape_prefix(ESC)
    }

    /// Translator with a custom escape prefix.
    pub fn with_escape_prefix(prefix: impl Into<String>) -> Self {
        Self {
            escape_prefix: prefix.into(),
        }
    }

    /// The prefix placed in front of every color suffix.
    pub fn escape_prefix(&self) -> &str {
        &self.escape_prefix
    }

    /// Replace color markers with ANSI codes and drop everything else
    /// marker-shaped.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_markers::Translator;
    ///
    /// let plain = Translator::new();
    /// assert_eq!(plain.color_ansi("§chi§r!"), "[31mhi!");
    ///
    /// let real = Translator::real_ansi();
    /// assert_eq!(real.color_ansi("§chi"), "\x1b[31mhi");
    /// ```
    pub fn color_ansi(&self, text: &str) -> String {
        let mut result = text.to_string();

        for code in SUBSTITUTION_ORDER {
            let Some(suffix) = code.ansi_suffix() else {
                continue;
            };
            let marker = code.marker();
            if !result.contains(marker) {
                continue;
            }
            let replacement = if suffix.is_empty() {
                String::new()
            } else {
                format!("{}{}", self.escape_prefix, suffix)
            };
            result = result.replace(marker, &replacement);
        }

        MARKER_RE.replace_all(&result, "").into_owned()
    }

    /// Translate and wrap the result in a markdown `ansi` fenced block.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_markers::Translator;
    ///
    /// let out = Translator::new().mark_filter("§aok");
    /// assert_eq!(out, "```ansi\n[32mok\n```");
    /// ```
    pub fn mark_filter(&self, text: &str) -> String {
        let body = self.color_ansi(text);
        let mut out =
            String::with_capacity(ANSI_FENCE_OPEN.len() + body.len() + ANSI_FENCE_CLOSE.len());
        out.push_str(ANSI_FENCE_OPEN);
        out.push_str(&body);
        out.push_str(ANSI_FENCE_CLOSE);
        out
    }
}

/// [`Translator::color_ansi`] with the default escape prefix.
pub fn color_ansi(text: &str) -> String {
    Translator::new().color_ansi(text)
}

/// [`Translator::mark_filter`] with the default escape prefix.
pub fn mark_filter(text: &str) -> String {
    Translator::new().mark_filter(text)
}
