//! Configuration types for pycc.

use crate::command::CommandChecker;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration, loaded from `pycc.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default per-check timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Per-checker overrides, keyed by checker name.
    #[serde(default)]
    pub checkers: HashMap<String, CheckerConfig>,

    /// Additional command checkers.
    #[serde(default)]
    pub custom: Vec<CustomCheckerConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a custom checker is
    /// missing its name or command.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for custom in &self.custom {
            if custom.name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: "custom checker has an empty name".to_string(),
                });
            }
            if custom.command.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: format!("custom checker '{}' has an empty command", custom.name),
                });
            }
        }
        Ok(())
    }

    /// Default per-check timeout, if configured.
    #[must_use]
    pub fn default_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Checks if a checker is enabled (default: true).
    #[must_use]
    pub fn is_checker_enabled(&self, name: &str) -> bool {
        self.checkers
            .get(name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the overrides for a checker.
    #[must_use]
    pub fn checker(&self, name: &str) -> Option<&CheckerConfig> {
        self.checkers.get(name)
    }
}

/// Per-checker overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    /// Whether this checker is registered at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Replacement argument list.
    #[serde(default)]
    pub args: Option<Vec<String>>,

    /// Timeout in seconds for this checker only.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl CheckerConfig {
    /// Applies these overrides to a command checker.
    #[must_use]
    pub fn apply(&self, mut checker: CommandChecker) -> CommandChecker {
        if let Some(args) = &self.args {
            checker = checker.args(args.iter().cloned());
        }
        if let Some(secs) = self.timeout {
            checker = checker.timeout(Duration::from_secs(secs));
        }
        checker
    }
}

/// A command checker declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomCheckerConfig {
    /// Checker name. Reusing a built-in name replaces the built-in.
    pub name: String,

    /// Executable to run.
    pub command: String,

    /// Arguments passed on every check.
    #[serde(default)]
    pub args: Vec<String>,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Arguments for the availability probe (default: `--version`).
    #[serde(default)]
    pub version_args: Option<Vec<String>>,

    /// Timeout in seconds for this checker only.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl CustomCheckerConfig {
    /// Builds the command checker this entry describes.
    #[must_use]
    pub fn to_checker(&self) -> CommandChecker {
        let mut checker = CommandChecker::new(&self.name, &self.command)
            .args(self.args.iter().cloned())
            .with_description(&self.description);
        if let Some(version_args) = &self.version_args {
            checker = checker.version_args(version_args.iter().cloned());
        }
        if let Some(secs) = self.timeout {
            checker = checker.timeout(Duration::from_secs(secs));
        }
        checker
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Well-formed TOML with invalid content.
    #[error("Invalid config: {message}")]
    Invalid {
        /// What is wrong.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Checker;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.timeout.is_none());
        assert!(config.checkers.is_empty());
        assert!(config.is_checker_enabled("black"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
timeout = 120

[checkers.pylint]
enabled = false

[checkers.black]
args = ["--check", "--diff", "."]
timeout = 60

[[custom]]
name = "ruff"
command = "ruff"
args = ["check", "."]
description = "Linting with Ruff"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.default_timeout(), Some(Duration::from_secs(120)));
        assert!(!config.is_checker_enabled("pylint"));
        assert!(config.is_checker_enabled("black"));

        let black = config
            .checker("black")
            .unwrap()
            .apply(CommandChecker::new("black", "black").args(["--check", "."]));
        assert_eq!(black.command_args(), ["--check", "--diff", "."]);

        assert_eq!(config.custom.len(), 1);
        let ruff = config.custom[0].to_checker();
        assert_eq!(ruff.name(), "ruff");
        assert_eq!(ruff.description(), "Linting with Ruff");
    }

    #[test]
    fn rejects_custom_without_command() {
        let toml = r#"
[[custom]]
name = "broken"
command = "  "
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::parse("timeuot = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
