//! CLI configuration via environment variables
//!
//! Settings that only affect how the binary presents itself live here. Run
//! settings (jobs, timeout) come from `vouch_config` instead.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Disable colored output (VOUCH_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Log filter directive (VOUCH_LOG, falling back to RUST_LOG)
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("VOUCH_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
            log_filter: env::var("VOUCH_LOG")
                .or_else(|_| env::var("RUST_LOG"))
                .ok()
                .filter(|f| !f.trim().is_empty()),
        }
    }
}
