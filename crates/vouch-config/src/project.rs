//! Project Configuration (vouch.toml)
//!
//! Handles project-level configuration stored in `vouch.toml`.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project configuration from vouch.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Runner settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<RunnerConfig>,

    /// Report settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

/// `[runner]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Cases in flight at once (default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Per-case timeout in milliseconds (default: none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// `[report]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// One line per case instead of dots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Colored output (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(runner) = &self.runner {
            if runner.jobs == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: "runner.jobs".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            if runner.timeout_ms == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: "runner.timeout_ms".to_string(),
                    reason: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn jobs(&self) -> Option<usize> {
        self.runner.as_ref().and_then(|r| r.jobs)
    }

    pub fn timeout_ms(&self) -> Option<u64> {
        self.runner.as_ref().and_then(|r| r.timeout_ms)
    }

    pub fn verbose(&self) -> Option<bool> {
        self.report.as_ref().and_then(|r| r.verbose)
    }

    pub fn color(&self) -> Option<bool> {
        self.report.as_ref().and_then(|r| r.color)
    }

    /// Mutable runner section, created on first use
    pub(crate) fn runner_mut(&mut self) -> &mut RunnerConfig {
        self.runner.get_or_insert_with(RunnerConfig::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_empty_config() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[runner]
jobs = 4
timeout_ms = 5000

[report]
verbose = true
color = false
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.jobs(), Some(4));
        assert_eq!(config.timeout_ms(), Some(5000));
        assert_eq!(config.verbose(), Some(true));
        assert_eq!(config.color(), Some(false));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[runner]
threads = 4
"#;
        assert!(toml::from_str::<ProjectConfig>(toml).is_err());
    }

    #[rstest]
    #[case("[runner]\njobs = 0\n", "runner.jobs")]
    #[case("[runner]\ntimeout_ms = 0\n", "runner.timeout_ms")]
    fn test_invalid_values(#[case] toml: &str, #[case] field: &str) {
        let config: ProjectConfig = toml::from_str(toml).unwrap();
        match config.validate() {
            Err(ConfigError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = ProjectConfig::load_from_file(Path::new("/nonexistent/vouch.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
