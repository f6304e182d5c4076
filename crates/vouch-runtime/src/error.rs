//! Error types for test cases and the runner
//!
//! Two layers:
//! - [`CaseError`] is scoped to a single case. The runner records it as that
//!   case's failure and moves on.
//! - [`RunnerError`] means the harness itself cannot produce trustworthy
//!   results. It aborts the whole run.

use crate::assert::AssertionFailure;
use std::any::Any;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Why a single test case failed
#[derive(Debug, Clone, Error)]
pub enum CaseError {
    /// An assertion did not hold
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// Any other error returned from the case body
    #[error("{message}")]
    Unhandled { message: String },

    /// The case body panicked
    #[error("panicked: {message}")]
    Panicked { message: String },

    /// The case did not finish within the configured limit
    #[error("timed out after {limit:?}")]
    TimedOut { limit: Duration },
}

impl CaseError {
    /// Wrap an arbitrary error raised inside a case body
    pub fn unhandled(err: impl fmt::Display) -> Self {
        CaseError::Unhandled {
            message: err.to_string(),
        }
    }

    /// The assertion failure, if this error came from one
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            CaseError::Assertion(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short category name for reports
    pub fn category(&self) -> &'static str {
        match self {
            CaseError::Assertion(_) => "assertion",
            CaseError::Unhandled { .. } => "error",
            CaseError::Panicked { .. } => "panic",
            CaseError::TimedOut { .. } => "timeout",
        }
    }
}

/// Errors in the harness itself
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("malformed registration at position {index}: {reason}")]
    MalformedRegistration { index: usize, reason: String },

    #[error("invalid concurrency {0}: must be at least 1")]
    InvalidConcurrency(usize),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Extract a readable message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
