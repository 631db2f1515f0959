//! Logger capability.
//!
//! Components never reach for a global logger. They take a [`Logger`]
//! at construction, so a caller can swap in the `log` facade, a silent
//! sink, or a recording double in tests.

use std::sync::Arc;

/// Default `log` target used by [`LogLogger`].
pub const DEFAULT_TARGET: &str = "relaytext";

/// A diagnostic sink with informational and error levels.
pub trait Logger: Send + Sync {
    /// Record an informational note.
    fn info(&self, message: &str);

    /// Record an error with its full detail.
    fn error(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Forwards to the `log` crate facade.
///
/// Whatever backend the binary installed (`env_logger` for `rt`)
/// receives the records under [`LogLogger::target`].
#[derive(Debug, Clone)]
pub struct LogLogger {
    target: String,
}

impl LogLogger {
    /// Create a logger writing under the default `relaytext` target.
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Create a logger writing under a custom target.
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The `log` target records are emitted under.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LogLogger {
    fn info(&self, message: &str) {
        log::info!(target: &self.target, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: &self.target, "{}", message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
