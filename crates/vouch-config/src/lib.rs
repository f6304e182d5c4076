//! Vouch Configuration System
//!
//! Provides configuration for test runs:
//! - Project configuration (vouch.toml)
//! - Environment variable overrides (VOUCH_*)
//!
//! # Configuration Hierarchy
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults
//! 2. Project config (./vouch.toml, searched upwards)
//! 3. Environment variables (VOUCH_JOBS, VOUCH_TIMEOUT_MS)
//! 4. CLI flags (applied by the caller)
//!
//! # Example
//!
//! ```no_run
//! use vouch_config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::new().load_from_directory(Path::new(".")).unwrap();
//! println!("jobs = {}", config.jobs());
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader, CONFIG_FILE_NAME};
pub use project::{ProjectConfig, ReportConfig, RunnerConfig};
