//! Relaytext Config
//!
//! This crate handles configuration loading and management
//! for relaytext, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/relaytext/config.toml`
//! - macOS: `~/Library/Application Support/relaytext/config.toml`
//! - Windows: `%APPDATA%\relaytext\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use relaytext_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod logging;
mod markers;

pub use logging::{LoggingConfig, LoggingOverride, LEVELS};
pub use markers::{MarkersConfig, MarkersOverride};

use relaytext_core::{RelayError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[markers]
EscapePrefix = ""
Trim         = true

[logging]
Level  = "warn"
Target = "relaytext"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Marker stripping and translation
    #[serde(default)]
    pub markers: MarkersConfig,

    /// Log level and target
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A partial config: only the keys an override actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub markers: MarkersOverride,

    #[serde(default)]
    pub logging: LoggingOverride,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[markers]"));
    /// assert!(toml.contains("[logging]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "relaytext")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| RelayError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Like [`Config::ensure_config_file`], inside `config_dir`.
    /// An existing file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RelayError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it names an existing file, load and merge it
    ///    - Otherwise, parse it as inline TOML and merge it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use relaytext_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[markers]\nEscapePrefix = \"\\u001b\"")).unwrap();
    /// assert_eq!(config.markers.escape_prefix, "\x1b");
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    ///
    /// Keys the override leaves out stay unset, so merging it only
    /// touches what it names.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| RelayError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; everything else keeps its
    /// current value.
    ///
    /// # Example
    ///
    /// ```
    /// use relaytext_config::Config;
    ///
    /// let mut base = Config::default();
    /// base.markers.escape_prefix = "\x1b".into();
    ///
    /// base.merge(&Config::parse_override("[markers]\nTrim = false").unwrap());
    /// assert!(!base.markers.trim);
    /// assert_eq!(base.markers.escape_prefix, "\x1b");
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.markers.merge(&other.markers);
        self.logging.merge(&other.logging);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| RelayError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.markers.escape_prefix, "");
        assert!(config.markers.trim);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_toml_matches_default() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [markers]
            EscapePrefix = "\u001b"
            [logging]
            Level = "debug"
        "#;
        let override_config = Config::parse_override(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.markers.escape_prefix, "\x1b");
        assert_eq!(base.logging.level, "debug");
    }

    #[test]
    fn test_merge_other_section_untouched() {
        let mut base: Config = toml::from_str(
            r#"
            [markers]
            EscapePrefix = "\u001b"
            Trim = false
        "#,
        )
        .unwrap();

        base.merge(&Config::parse_override("[logging]\nLevel = \"debug\"").unwrap());

        assert_eq!(base.markers.escape_prefix, "\x1b");
        assert!(!base.markers.trim);
        assert_eq!(base.logging.level, "debug");
        assert_eq!(base.logging.target, "relaytext");
    }

    #[test]
    fn test_parse_override_inline() {
        let config = Config::parse_override("[logging]\nLevel = \"info\"").unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(config.markers, MarkersOverride::default());
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[markers\nTrim = ").unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("relaytext"));
        }
    }

    #[test]
    fn test_save_and_load_from() {
        let path = std::env::temp_dir().join(format!(
            "relaytext-config-test-{}.toml",
            std::process::id()
        ));

        let mut config = Config::default();
        config.markers.trim = false;
        config.logging.level = "error".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_config_file_in() {
        let dir = std::env::temp_dir().join(format!(
            "relaytext-config-init-{}",
            std::process::id()
        ));

        let path = Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(path, dir.join("config.toml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TOML);

        // A second call keeps user edits.
        std::fs::write(&path, "[markers]\nTrim = false\n").unwrap();
        Config::ensure_config_file_in(&dir).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(!loaded.markers.trim);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/relaytext.toml")).unwrap_err();
        assert!(matches!(err, RelayError::Io(_)));
    }
}
