//! Lookup outcomes.

use std::fmt;

/// Why no lookup was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Input is not a dotted numeric address; taken to be a hostname already.
    NotAnAddress,
    /// `127.0.0.1` is answered locally.
    Loopback,
}

/// How a single forward or reverse lookup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The lookup produced a name (reverse) or address (forward).
    Resolved(String),
    /// No lookup was attempted.
    Skipped(SkipReason),
    /// The record exists but carries no usable name.
    NoName,
    /// The resolver reported no such record.
    NotFound(String),
    /// Any other failure, with its full detail.
    Failed(String),
}

impl LookupOutcome {
    /// Whether a value was produced.
    pub fn is_resolved(&self) -> bool {
        matches!(self, LookupOutcome::Resolved(_))
    }

    /// The resolved value, or `fallback` for every other outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_resolve::{LookupOutcome, SkipReason};
    ///
    /// let hit = LookupOutcome::Resolved("localhost".into());
    /// assert_eq!(hit.resolved_or("127.0.0.1"), "localhost");
    ///
    /// let miss = LookupOutcome::Skipped(SkipReason::Loopback);
    /// assert_eq!(miss.resolved_or("127.0.0.1"), "127.0.0.1");
    /// ```
    pub fn resolved_or(self, fallback: &str) -> String {
        match self {
            LookupOutcome::Resolved(value) => value,
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Resolved(value) => write!(f, "resolved to {}", value),
            LookupOutcome::Skipped(SkipReason::NotAnAddress) => write!(f, "skipped: not an IP address"),
            LookupOutcome::Skipped(SkipReason::Loopback) => write!(f, "skipped: loopback"),
            LookupOutcome::NoName => write!(f, "no hostname"),
            LookupOutcome::NotFound(detail) => write!(f, "not found: {}", detail),
            LookupOutcome::Failed(detail) => write!(f, "failed: {}", detail),
        }
    }
}
