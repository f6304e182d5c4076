//! Configuration Loader
//!
//! Loads vouch.toml and merges environment overrides on top of it.

use crate::project::ProjectConfig;
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "vouch.toml";

/// Configuration loader
///
/// Precedence, lowest first:
/// 1. Project config (vouch.toml)
/// 2. Environment variables (VOUCH_*)
/// 3. CLI flags (handled by caller)
///
/// A setting the caller takes from a flag is dropped from the lower layers,
/// so a bad `VOUCH_*` value for it is ignored rather than fatal.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    jobs_from_flag: bool,
    timeout_from_flag: bool,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration with environment overrides applied
    pub project: ProjectConfig,

    /// Directory where vouch.toml was found
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The caller supplies the number of jobs itself
    pub fn jobs_set_by_flag(mut self, set: bool) -> Self {
        self.jobs_from_flag = set;
        self
    }

    /// The caller supplies the per-case timeout itself
    pub fn timeout_set_by_flag(mut self, set: bool) -> Self {
        self.timeout_from_flag = set;
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find vouch.toml. A missing file is not
    /// an error; defaults apply.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Load configuration from a specific vouch.toml
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find project configuration by walking up the directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides to project config
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if self.jobs_from_flag {
            config.runner_mut().jobs = None;
        } else if let Some(jobs) = parse_env::<usize>("VOUCH_JOBS")? {
            config.runner_mut().jobs = Some(jobs);
        }

        if self.timeout_from_flag {
            config.runner_mut().timeout_ms = None;
        } else if let Some(timeout_ms) = parse_env::<u64>("VOUCH_TIMEOUT_MS")? {
            config.runner_mut().timeout_ms = Some(timeout_ms);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read and parse an environment variable, if set
fn parse_env<T>(name: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: name.to_string(),
                reason: format!("'{}': {}", raw, e),
            }),
        Err(_) => Ok(None),
    }
}

impl Config {
    /// Effective number of cases in flight (default: 1)
    ///
    /// Falls back to the default when the loader was told a flag sets it.
    pub fn jobs(&self) -> usize {
        self.project.jobs().unwrap_or(1)
    }

    /// Effective per-case timeout in milliseconds
    pub fn timeout_ms(&self) -> Option<u64> {
        self.project.timeout_ms()
    }

    /// Whether the report lists every case (default: false)
    pub fn verbose(&self) -> bool {
        self.project.verbose().unwrap_or(false)
    }

    /// Whether the report is colored (default: true)
    pub fn color(&self) -> bool {
        self.project.color().unwrap_or(true)
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if a vouch.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, content).unwrap();
        config_path
    }

    fn clear_env() {
        env::remove_var("VOUCH_JOBS");
        env::remove_var("VOUCH_TIMEOUT_MS");
    }

    #[test]
    #[serial]
    fn test_load_project_config() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[runner]\njobs = 3\n");

        let config = ConfigLoader::new()
            .load_from_directory(temp_dir.path())
            .unwrap();

        assert_eq!(config.jobs(), 3);
        assert!(config.is_project());
    }

    #[test]
    #[serial]
    fn test_find_config_in_parent() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[report]\nverbose = true\n");

        let sub_dir = temp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&sub_dir).unwrap();

        let config = ConfigLoader::new().load_from_directory(&sub_dir).unwrap();

        assert!(config.verbose());
        assert_eq!(config.project_root(), Some(temp_dir.path()));
    }

    #[test]
    #[serial]
    fn test_defaults_without_project() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();

        let config = ConfigLoader::new()
            .load_from_directory(temp_dir.path())
            .unwrap();

        assert_eq!(config.jobs(), 1);
        assert_eq!(config.timeout_ms(), None);
        assert!(!config.verbose());
        assert!(config.color());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[runner]\njobs = 2\ntimeout_ms = 100\n");

        env::set_var("VOUCH_JOBS", "8");
        env::set_var("VOUCH_TIMEOUT_MS", "250");

        let config = ConfigLoader::new()
            .load_from_directory(temp_dir.path())
            .unwrap();

        assert_eq!(config.jobs(), 8);
        assert_eq!(config.timeout_ms(), Some(250));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_invalid_value() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        env::set_var("VOUCH_JOBS", "many");

        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "VOUCH_JOBS"
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_zero_jobs_rejected() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        env::set_var("VOUCH_JOBS", "0");

        let result = ConfigLoader::new().load_from_directory(temp_dir.path());
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flag_supersedes_bad_env_value() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        env::set_var("VOUCH_JOBS", "0");
        env::set_var("VOUCH_TIMEOUT_MS", "soon");

        let config = ConfigLoader::new()
            .jobs_set_by_flag(true)
            .timeout_set_by_flag(true)
            .load_from_directory(temp_dir.path())
            .unwrap();
        assert_eq!(config.project.jobs(), None);
        assert_eq!(config.timeout_ms(), None);

        // Only the flagged setting is excused
        let result = ConfigLoader::new()
            .jobs_set_by_flag(true)
            .load_from_directory(temp_dir.path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "VOUCH_TIMEOUT_MS"
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flag_supersedes_file_value() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        create_config_file(temp_dir.path(), "[runner]\njobs = 0\ntimeout_ms = 100\n");

        let config = ConfigLoader::new()
            .jobs_set_by_flag(true)
            .load_from_directory(temp_dir.path())
            .unwrap();
        assert_eq!(config.jobs(), 1);
        assert_eq!(config.timeout_ms(), Some(100));
    }

    #[test]
    #[serial]
    fn test_invalid_toml_reports_file() {
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = create_config_file(temp_dir.path(), "[runner\njobs = ");

        let result = ConfigLoader::new().load_from_file(&path);
        match result {
            Err(ConfigError::TomlParseError { file, .. }) => assert_eq!(file, path),
            other => panic!("expected TomlParseError, got {:?}", other),
        }
    }
}
