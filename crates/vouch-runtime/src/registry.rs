//! Test registry - an ordered, explicitly owned collection of test cases
//!
//! Cases are registered under a label with an optional body. Synchronous and
//! asynchronous bodies are stored the same way: as a boxed closure producing
//! a future, so the runner always awaits.

use crate::error::CaseError;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;

/// What a case body returns
pub type CaseResult = Result<(), CaseError>;

pub(crate) type Work = Box<dyn FnOnce() -> LocalBoxFuture<'static, CaseResult>>;

/// A registered test case
pub struct TestCase {
    label: String,
    work: Option<Work>,
}

impl TestCase {
    /// Label the case was registered under
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True if the case has no body
    pub fn is_pending(&self) -> bool {
        self.work.is_none()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Work>) {
        (self.label, self.work)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("label", &self.label)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Ordered collection of test cases
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synchronous case
    pub fn register<F>(&mut self, label: impl Into<String>, work: F) -> &mut Self
    where
        F: FnOnce() -> CaseResult + 'static,
    {
        let work: Work = Box::new(move || async move { work() }.boxed_local());
        self.push(label.into(), Some(work))
    }

    /// Register an asynchronous case
    pub fn register_async<F, Fut>(&mut self, label: impl Into<String>, work: F) -> &mut Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = CaseResult> + 'static,
    {
        let work: Work = Box::new(move || work().boxed_local());
        self.push(label.into(), Some(work))
    }

    /// Register a placeholder with no body; it is reported as skipped
    pub fn register_pending(&mut self, label: impl Into<String>) -> &mut Self {
        self.push(label.into(), None)
    }

    /// Append every case of `other`, keeping its order
    pub fn extend(&mut self, other: Registry) -> &mut Self {
        self.cases.extend(other.cases);
        self
    }

    /// Keep only cases whose label contains `pattern`
    pub fn filter(self, pattern: &str) -> Self {
        Registry {
            cases: self
                .cases
                .into_iter()
                .filter(|case| case.label.contains(pattern))
                .collect(),
        }
    }

    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.cases.iter().map(TestCase::label).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub(crate) fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }

    fn push(&mut self, label: String, work: Option<Work>) -> &mut Self {
        self.cases.push(TestCase { label, work });
        self
    }
}
