//! Vouch Runtime - test registry, runner and assertions
//!
//! This library provides:
//! - An explicit, ordered registry of named test cases
//! - A runner that awaits every case (sync or async) and records one outcome
//!   per case in registration order
//! - Assertion primitives over tagged values
//! - Deferred-value helpers for asynchronous case bodies
//!
//! # Example
//!
//! ```
//! use vouch_runtime::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry
//!     .register("sum", || {
//!         assert_equal(4 + 6, 10)?;
//!         Ok(())
//!     })
//!     .register_pending("placeholder");
//!
//! let report = TestRunner::new().run(registry).unwrap();
//! assert_eq!(report.summary().passed, 1);
//! assert_eq!(report.summary().skipped, 1);
//! ```

/// Vouch runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assert;
pub mod async_runtime;
pub mod error;
mod panic_hook;
pub mod registry;
pub mod result;
pub mod runner;
pub mod value;

// Re-export commonly used types
pub use assert::{AssertResult, AssertionFailure, AssertionKind};
pub use error::{CaseError, RunnerError};
pub use registry::{CaseResult, Registry, TestCase};
pub use result::{OutcomeKind, RunReport, RunSummary, TestOutcome, TestResult};
pub use runner::TestRunner;
pub use value::Value;

/// Everything a suite author needs in one import
pub mod prelude {
    pub use crate::assert::{
        assert_contains, assert_deep_equal, assert_equal, assert_false, assert_length,
        assert_no_throw, assert_not_deep_equal, assert_not_equal, assert_rejects,
        assert_throws, assert_true,
    };
    pub use crate::async_runtime::{delayed_rejection, delayed_value, join_all};
    pub use crate::error::CaseError;
    pub use crate::registry::{CaseResult, Registry};
    pub use crate::runner::TestRunner;
    pub use crate::value::Value;
}
