//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log levels accepted by [`LoggingConfig::level`].
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// Minimum level shown (trace, debug, info, warn, error).
    /// Default: "warn"
    #[serde(default = "default_level")]
    pub level: String,

    /// `log` target the library's messages are written under.
    /// Default: "relaytext"
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            target: default_target(),
        }
    }
}

/// `[logging]` keys present in an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingOverride {
    pub level: Option<String>,
    pub target: Option<String>,
}

impl LoggingConfig {
    /// Apply the keys set in `other`, leaving the rest alone.
    pub fn merge(&mut self, other: &LoggingOverride) {
        if let Some(level) = &other.level {
            self.level = level.clone();
        }
        if let Some(target) = &other.target {
            self.target = target.clone();
        }
    }

    /// Whether `level` names a known level, ignoring case.
    pub fn is_valid_level(&self) -> bool {
        let level = self.level.to_lowercase();
        LEVELS.contains(&level.as_str())
    }
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_target() -> String {
    relaytext_core::logger::DEFAULT_TARGET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.target, "relaytext");
        assert!(logging.is_valid_level());
    }

    #[test]
    fn test_merge_keeps_unset_target() {
        let mut logging = LoggingConfig {
            level: "warn".into(),
            target: "relay".into(),
        };
        let other: LoggingOverride = toml::from_str("Level = \"debug\"").unwrap();
        logging.merge(&other);
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.target, "relay");
    }

    #[test]
    fn test_level_validation() {
        let mut logging = LoggingConfig::default();
        logging.level = "DEBUG".into();
        assert!(logging.is_valid_level());
        logging.level = "verbose".into();
        assert!(!logging.is_valid_level());
    }
}
