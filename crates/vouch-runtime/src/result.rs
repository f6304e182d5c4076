//! Test result types.

use crate::error::CaseError;
use serde::Serialize;
use std::time::Duration;

/// Outcome of a single test case.
#[derive(Debug, Clone)]
pub enum TestOutcome {
    /// The case body completed without error.
    Passed,
    /// The case body failed, panicked, or timed out.
    Failed(CaseError),
    /// The case was registered without a body.
    Skipped,
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestOutcome::Skipped)
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            TestOutcome::Passed => OutcomeKind::Passed,
            TestOutcome::Failed(_) => OutcomeKind::Failed,
            TestOutcome::Skipped => OutcomeKind::Skipped,
        }
    }

    /// The failure detail, for failed cases.
    pub fn error(&self) -> Option<&CaseError> {
        match self {
            TestOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome without its payload, for serialization and tallying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Passed,
    Failed,
    Skipped,
}

/// Result of running a single test case.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Label the case was registered under.
    pub label: String,
    /// Outcome of the case.
    pub outcome: TestOutcome,
    /// Time taken to run the case.
    pub duration: Duration,
}

impl TestResult {
    /// Create a passed test result.
    pub fn passed(label: impl Into<String>, duration: Duration) -> Self {
        TestResult {
            label: label.into(),
            outcome: TestOutcome::Passed,
            duration,
        }
    }

    /// Create a failed test result.
    #[cold]
    pub fn failed(label: impl Into<String>, error: CaseError, duration: Duration) -> Self {
        TestResult {
            label: label.into(),
            outcome: TestOutcome::Failed(error),
            duration,
        }
    }

    /// Create a skipped test result.
    pub fn skipped(label: impl Into<String>) -> Self {
        TestResult {
            label: label.into(),
            outcome: TestOutcome::Skipped,
            duration: Duration::ZERO,
        }
    }
}

/// Tallies over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of registered cases (skipped ones included).
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Wall-clock time of the whole run.
    pub duration: Duration,
}

impl RunSummary {
    /// No case failed. Skipped cases do not count against success.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Every result of a run, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<TestResult>,
    pub duration: Duration,
}

impl RunReport {
    pub fn new(results: Vec<TestResult>, duration: Duration) -> Self {
        Self { results, duration }
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            total: self.results.len(),
            duration: self.duration,
            ..RunSummary::default()
        };
        for result in &self.results {
            match result.outcome.kind() {
                OutcomeKind::Passed => summary.passed += 1,
                OutcomeKind::Failed => summary.failed += 1,
                OutcomeKind::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn all_passed(&self) -> bool {
        !self.results.iter().any(|r| r.outcome.is_failed())
    }

    /// Process exit code: 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Failed results, in registration order.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.outcome.is_failed())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
