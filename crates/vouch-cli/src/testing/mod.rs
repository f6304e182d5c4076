//! Report rendering for test runs
//!
//! - `reporter`: human-readable PASS/FAIL/SKIP output
//! - `json`: machine-readable run document

pub mod json;
pub mod reporter;

pub use json::{list_json, report_json};
pub use reporter::TestReporter;
