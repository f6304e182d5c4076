//! Async runtime helpers
//!
//! The runner drives every case on a current-thread tokio runtime. This
//! module builds that runtime and provides small deferred-value fixtures for
//! asynchronous case bodies.

use crate::error::CaseError;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

/// Build a current-thread runtime with timers enabled
pub fn build_runtime() -> io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

/// Block on a future until it completes
///
/// Creates a fresh runtime for each call, so it must not be used from inside
/// another runtime.
pub fn block_on<F>(future: F) -> io::Result<F::Output>
where
    F: Future,
{
    Ok(build_runtime()?.block_on(future))
}

/// Resolve to `value` after `delay`
pub async fn delayed_value<T>(value: T, delay: Duration) -> T {
    tokio::time::sleep(delay).await;
    value
}

/// Reject with `message` after `delay`
pub async fn delayed_rejection<T>(
    message: impl Into<String>,
    delay: Duration,
) -> Result<T, CaseError> {
    tokio::time::sleep(delay).await;
    Err(CaseError::Unhandled {
        message: message.into(),
    })
}

/// Await every future, returning their values in input order, or the first
/// error
pub async fn join_all<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    futures_util::future::try_join_all(futures).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_block_on() {
        let result = block_on(async { 42 }).unwrap();
        assert_eq!(result, 42);
    }

    #[test]
    fn test_delayed_value_waits() {
        let start = Instant::now();
        let value = block_on(delayed_value(1, Duration::from_millis(50))).unwrap();
        assert_eq!(value, 1);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_delayed_rejection() {
        let result: Result<(), _> = delayed_rejection("nope", Duration::from_millis(1)).await;
        assert_eq!(result.unwrap_err().to_string(), "nope");
    }

    async fn ok_after(value: i32, ms: u64) -> Result<i32, CaseError> {
        Ok(delayed_value(value, Duration::from_millis(ms)).await)
    }

    #[tokio::test]
    async fn test_join_all_keeps_input_order() {
        let values = join_all(vec![ok_after(1, 30), ok_after(2, 1)])
            .await
            .unwrap();
        assert_eq!(values, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_join_all_reports_first_error() {
        let result = join_all(vec![
            delayed_rejection::<i32>("first", Duration::from_millis(1)),
            delayed_rejection::<i32>("second", Duration::from_millis(20)),
        ])
        .await;
        assert_eq!(result.unwrap_err().to_string(), "first");
    }
}
