//! Marker handling configuration.
//!
//! This module contains the `MarkersConfig` struct which controls how
//! color markers are stripped and translated.

use relaytext_markers::{Translator, DEFAULT_ESCAPE_PREFIX};
use serde::{Deserialize, Serialize};

/// Marker handling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkersConfig {
    /// Prefix written before each ANSI color suffix.
    /// Default: "" (bare `[31m` suffixes). Set to "\u001b" for real ANSI.
    #[serde(default = "default_escape_prefix")]
    pub escape_prefix: String,

    /// Trim surrounding whitespace when stripping markers.
    /// Default: true
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            escape_prefix: default_escape_prefix(),
            trim: true,
        }
    }
}

/// `[markers]` keys present in an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkersOverride {
    pub escape_prefix: Option<String>,
    pub trim: Option<bool>,
}

impl MarkersConfig {
    /// Apply the keys set in `other`, leaving the rest alone.
    pub fn merge(&mut self, other: &MarkersOverride) {
        if let Some(prefix) = &other.escape_prefix {
            self.escape_prefix = prefix.clone();
        }
        if let Some(trim) = other.trim {
            self.trim = trim;
        }
    }

    /// Build a translator using the configured escape prefix.
    pub fn translator(&self) -> Translator {
        Translator::with_escape_prefix(self.escape_prefix.clone())
    }
}

fn default_true() -> bool {
    true
}

fn default_escape_prefix() -> String {
    DEFAULT_ESCAPE_PREFIX.to_string()
}
