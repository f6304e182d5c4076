//! Test runner - execute registered cases

use crate::async_runtime;
use crate::error::{panic_message, CaseError, RunnerError};
use crate::panic_hook::SilencePanics;
use crate::registry::{Registry, TestCase};
use crate::result::{RunReport, TestResult};
use futures_util::stream::{self, StreamExt};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Test runner with configuration
#[derive(Debug, Clone)]
pub struct TestRunner {
    /// Maximum number of cases in flight at once
    concurrency: usize,
    /// Per-case time limit
    timeout: Option<Duration>,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    /// Create a new test runner: sequential, no timeout
    pub fn new() -> Self {
        Self {
            concurrency: 1,
            timeout: None,
        }
    }

    /// Set how many cases may be in flight at once
    ///
    /// Cases interleave on one thread; results are still reported in
    /// registration order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the timeout for individual cases
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run every case on a fresh current-thread runtime
    ///
    /// Must not be called from inside an async context; use [`run_async`]
    /// there.
    ///
    /// [`run_async`]: TestRunner::run_async
    pub fn run(&self, registry: Registry) -> Result<RunReport, RunnerError> {
        self.validate(&registry)?;
        let runtime = async_runtime::build_runtime()?;
        runtime.block_on(self.run_async(registry))
    }

    /// Run every case on the current runtime
    pub async fn run_async(&self, registry: Registry) -> Result<RunReport, RunnerError> {
        self.validate(&registry)?;

        info!(
            cases = registry.len(),
            concurrency = self.concurrency,
            "starting run"
        );
        let start = Instant::now();
        // Panics become case failures; keep the hook from also printing them
        let _silence = SilencePanics::new();

        // `buffered` yields in input order regardless of completion order
        let results: Vec<TestResult> = stream::iter(registry.into_cases())
            .map(|case| self.run_single_case(case))
            .buffered(self.concurrency)
            .collect()
            .await;

        let report = RunReport::new(results, start.elapsed());
        let summary = report.summary();
        info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            duration_ms = summary.duration.as_millis() as u64,
            "run finished"
        );
        Ok(report)
    }

    /// Reject registrations the runner cannot report on
    fn validate(&self, registry: &Registry) -> Result<(), RunnerError> {
        if self.concurrency == 0 {
            return Err(RunnerError::InvalidConcurrency(self.concurrency));
        }
        for (index, case) in registry.cases().enumerate() {
            if case.label().trim().is_empty() {
                return Err(RunnerError::MalformedRegistration {
                    index,
                    reason: "label is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Run a single case
    async fn run_single_case(&self, case: TestCase) -> TestResult {
        let (label, work) = case.into_parts();

        let Some(work) = work else {
            debug!(label = %label, "skipping pending case");
            return TestResult::skipped(label);
        };

        debug!(label = %label, "running case");
        let start = Instant::now();

        // Calling `work` happens inside the guarded future so a panic while
        // building the body is caught as well.
        let task = AssertUnwindSafe(async move { work().await }).catch_unwind();

        let settled = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, task).await {
                Ok(settled) => settled,
                Err(_) => {
                    warn!(label = %label, ?limit, "case timed out");
                    return TestResult::failed(
                        label,
                        CaseError::TimedOut { limit },
                        start.elapsed(),
                    );
                }
            },
            None => task.await,
        };

        let duration = start.elapsed();
        match settled {
            Ok(Ok(())) => {
                debug!(label = %label, ?duration, "case passed");
                TestResult::passed(label, duration)
            }
            Ok(Err(error)) => {
                debug!(label = %label, error = %error, "case failed");
                TestResult::failed(label, error, duration)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(label = %label, %message, "case panicked");
                TestResult::failed(label, CaseError::Panicked { message }, duration)
            }
        }
    }
}
