//! Tracing setup
//!
//! Logs go to stderr so stdout carries only the report. Nothing is installed
//! unless a filter is configured.

use crate::config::Config;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `VOUCH_LOG` or `RUST_LOG` is set.
pub fn init_tracing(config: &Config) {
    let Some(directives) = config.log_filter.as_deref() else {
        return;
    };

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
