//! Assertion primitives
//!
//! Every assertion returns [`AssertResult`]. Failures carry the comparison
//! kind and, where meaningful, both the actual and the expected value, so a
//! case body can bail out with `?`.
//!
//! # API
//!
//! ## Basic
//! - `assert_true(condition, message)`
//! - `assert_false(condition, message)`
//!
//! ## Equality
//! - `assert_equal(actual, expected)`: strict, primitives only
//! - `assert_not_equal(actual, expected)`
//! - `assert_deep_equal(actual, expected)`: structural
//! - `assert_not_deep_equal(actual, expected)`
//!
//! ## Collections
//! - `assert_contains(haystack, needle)`: array element or substring
//! - `assert_length(value, expected)`: array, string or object
//!
//! ## Errors
//! - `assert_throws(f)`: `f` returns `Err` or panics
//! - `assert_no_throw(f)`
//! - `assert_rejects(future)`: `future` resolves to `Err` or panics

use crate::error::panic_message;
use crate::panic_hook::SilencePanics;
use crate::value::Value;
use futures_util::FutureExt;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Result of a single assertion
pub type AssertResult = Result<(), AssertionFailure>;

/// Which comparison failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    Truthy,
    Falsy,
    Equal,
    NotEqual,
    DeepEqual,
    NotDeepEqual,
    Contains,
    Length,
    Throws,
    NoThrow,
    Rejects,
}

/// An expectation that did not hold
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    /// Comparison that failed
    pub kind: AssertionKind,
    /// Human-readable explanation
    pub message: String,
    /// Expected value, when the comparison has one
    pub expected: Option<Value>,
    /// Actual value, when the comparison has one
    pub actual: Option<Value>,
}

impl AssertionFailure {
    pub fn new(kind: AssertionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Failure carrying both sides of a comparison
    pub fn mismatch(
        kind: AssertionKind,
        message: impl Into<String>,
        actual: Value,
        expected: Value,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(actual) = &self.actual {
            write!(f, "\n  Actual:   {}", actual)?;
        }
        if let Some(expected) = &self.expected {
            write!(f, "\n  Expected: {}", expected)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}

// ============================================================================
// Basic assertions
// ============================================================================

/// Fails with `message` if `condition` is false.
pub fn assert_true(condition: bool, message: &str) -> AssertResult {
    if !condition {
        return Err(AssertionFailure::new(
            AssertionKind::Truthy,
            format!("Assertion failed: {}", message),
        ));
    }
    Ok(())
}

/// Fails with `message` if `condition` is true.
pub fn assert_false(condition: bool, message: &str) -> AssertResult {
    if condition {
        return Err(AssertionFailure::new(
            AssertionKind::Falsy,
            format!("Assertion failed (expected false): {}", message),
        ));
    }
    Ok(())
}

// ============================================================================
// Equality assertions
// ============================================================================

/// Strict equality for primitives.
///
/// Arrays and objects are never strictly equal; use [`assert_deep_equal`].
pub fn assert_equal(actual: impl Into<Value>, expected: impl Into<Value>) -> AssertResult {
    let actual = actual.into();
    let expected = expected.into();

    if actual.same_value(&expected) {
        return Ok(());
    }

    let message = if actual.is_composite() && actual.deep_equals(&expected) {
        format!(
            "Assertion failed: {} values are never strictly equal (use assert_deep_equal)",
            actual.type_name()
        )
    } else {
        "Assertion failed: values not equal".to_string()
    };
    Err(AssertionFailure::mismatch(
        AssertionKind::Equal,
        message,
        actual,
        expected,
    ))
}

/// Succeeds if `actual` and `expected` are not strictly equal.
pub fn assert_not_equal(actual: impl Into<Value>, expected: impl Into<Value>) -> AssertResult {
    let actual = actual.into();
    let expected = expected.into();

    if actual.same_value(&expected) {
        return Err(AssertionFailure::mismatch(
            AssertionKind::NotEqual,
            "Assertion failed: values are equal (expected them to differ)",
            actual,
            expected,
        ));
    }
    Ok(())
}

/// Structural equality: arrays by position, objects by key.
pub fn assert_deep_equal(actual: impl Into<Value>, expected: impl Into<Value>) -> AssertResult {
    let actual = actual.into();
    let expected = expected.into();

    if !actual.deep_equals(&expected) {
        return Err(AssertionFailure::mismatch(
            AssertionKind::DeepEqual,
            "Assertion failed: values not deeply equal",
            actual,
            expected,
        ));
    }
    Ok(())
}

/// Succeeds if `actual` and `expected` differ structurally.
pub fn assert_not_deep_equal(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
) -> AssertResult {
    let actual = actual.into();
    let expected = expected.into();

    if actual.deep_equals(&expected) {
        return Err(AssertionFailure::mismatch(
            AssertionKind::NotDeepEqual,
            "Assertion failed: values are deeply equal (expected them to differ)",
            actual,
            expected,
        ));
    }
    Ok(())
}

// ============================================================================
// Collection assertions
// ============================================================================

/// An array containing a deeply equal element, or a string containing a
/// substring.
pub fn assert_contains(haystack: impl Into<Value>, needle: impl Into<Value>) -> AssertResult {
    let haystack = haystack.into();
    let needle = needle.into();

    let found = match (&haystack, &needle) {
        (Value::Array(items), _) => items.iter().any(|item| item.deep_equals(&needle)),
        (Value::String(s), Value::String(sub)) => s.contains(sub.as_str()),
        (Value::String(_), other) => {
            return Err(AssertionFailure::new(
                AssertionKind::Contains,
                format!(
                    "assert_contains: expected a string needle, got {}",
                    other.type_name()
                ),
            ));
        }
        (other, _) => {
            return Err(AssertionFailure::new(
                AssertionKind::Contains,
                format!(
                    "assert_contains: expected array or string, got {}",
                    other.type_name()
                ),
            ));
        }
    };

    if !found {
        return Err(AssertionFailure::mismatch(
            AssertionKind::Contains,
            format!("assert_contains: {} does not contain {}", haystack.type_name(), needle),
            haystack,
            needle,
        ));
    }
    Ok(())
}

/// Element count of an array, character count of a string, key count of an
/// object.
pub fn assert_length(value: impl Into<Value>, expected: usize) -> AssertResult {
    let value = value.into();

    let actual = match &value {
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        Value::Object(map) => map.len(),
        other => {
            return Err(AssertionFailure::new(
                AssertionKind::Length,
                format!(
                    "assert_length: expected array, string or object, got {}",
                    other.type_name()
                ),
            ));
        }
    };

    if actual != expected {
        return Err(AssertionFailure::mismatch(
            AssertionKind::Length,
            format!("assert_length: expected length {}, got {}", expected, actual),
            Value::from(actual),
            Value::from(expected),
        ));
    }
    Ok(())
}

// ============================================================================
// Error assertions
// ============================================================================

/// Calls `f` and asserts it fails, either by returning `Err` or by panicking.
pub fn assert_throws<F, T, E>(f: F) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
{
    let _silence = SilencePanics::new();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(_)) => Err(AssertionFailure::new(
            AssertionKind::Throws,
            "assert_throws: expected function to throw, but it returned successfully",
        )),
        Ok(Err(_)) | Err(_) => Ok(()),
    }
}

/// Calls `f` and asserts it returns `Ok` without panicking.
pub fn assert_no_throw<F, T, E>(f: F) -> AssertResult
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    let _silence = SilencePanics::new();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(AssertionFailure::new(
            AssertionKind::NoThrow,
            format!(
                "assert_no_throw: expected function to succeed, but it threw: {}",
                e
            ),
        )),
        Err(payload) => Err(AssertionFailure::new(
            AssertionKind::NoThrow,
            format!(
                "assert_no_throw: expected function to succeed, but it panicked: {}",
                panic_message(payload.as_ref())
            ),
        )),
    }
}

/// Awaits `future` and asserts it settles with `Err` (or panics).
pub async fn assert_rejects<Fut, T, E>(future: Fut) -> AssertResult
where
    Fut: Future<Output = Result<T, E>>,
{
    let _silence = SilencePanics::new();
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(_)) => Err(AssertionFailure::new(
            AssertionKind::Rejects,
            "assert_rejects: expected future to reject, but it resolved",
        )),
        Ok(Err(_)) | Err(_) => Ok(()),
    }
}

// ============================================================================
// Unit tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_number(s: &str) -> Result<i32, String> {
        s.parse::<i32>().map_err(|e| e.to_string())
    }

    // -- assert_true / assert_false -------------------------------------------

    #[test]
    fn test_assert_true_passes_on_true() {
        assert!(assert_true(true, "ok").is_ok());
    }

    #[test]
    fn test_assert_true_fails_with_message() {
        let failure = assert_true(false, "custom msg").unwrap_err();
        assert_eq!(failure.kind, AssertionKind::Truthy);
        assert!(failure.to_string().contains("custom msg"));
    }

    #[test]
    fn test_assert_false_fails_on_true() {
        let failure = assert_false(true, "was true").unwrap_err();
        assert!(failure.to_string().contains("expected false"));
    }

    // -- assert_equal ---------------------------------------------------------

    #[test]
    fn test_assert_equal_primitives() {
        assert!(assert_equal(10, 10).is_ok());
        assert!(assert_equal("My string is 10", "My string is 10").is_ok());
        assert!(assert_equal(true, true).is_ok());
    }

    #[test]
    fn test_assert_equal_mismatch_carries_both_values() {
        let failure = assert_equal(1, 2).unwrap_err();
        assert_eq!(failure.kind, AssertionKind::Equal);
        assert_eq!(failure.actual, Some(Value::from(1)));
        assert_eq!(failure.expected, Some(Value::from(2)));

        let rendered = failure.to_string();
        assert!(rendered.contains("Actual:   1"), "msg: {}", rendered);
        assert!(rendered.contains("Expected: 2"), "msg: {}", rendered);
    }

    #[test]
    fn test_assert_equal_rejects_composites() {
        let failure = assert_equal(vec![1, 2], vec![1, 2]).unwrap_err();
        assert!(failure.message.contains("assert_deep_equal"));
    }

    #[test]
    fn test_assert_equal_large_integers_exact() {
        assert!(assert_equal(9_007_199_254_740_993_i64, 9_007_199_254_740_992_i64).is_err());
        assert!(assert_equal(u64::MAX, u64::MAX - 1).is_err());
        assert!(assert_equal(u64::MAX, u64::MAX).is_ok());
        assert!(assert_equal(1000, 10_f64.powi(3)).is_ok());
    }

    #[test]
    fn test_assert_equal_different_types() {
        assert!(assert_equal(1, "1").is_err());
    }

    #[test]
    fn test_assert_not_equal() {
        assert!(assert_not_equal(1, 2).is_ok());
        let failure = assert_not_equal("same", "same").unwrap_err();
        assert!(failure.message.contains("expected them to differ"));
    }

    // -- assert_deep_equal ----------------------------------------------------

    #[test]
    fn test_assert_deep_equal_arrays() {
        assert!(assert_deep_equal(vec![1, 2, 3], [1, 2, 3]).is_ok());
        assert!(assert_deep_equal(vec![1, 2, 3], [3, 2, 1]).is_err());
    }

    #[test]
    fn test_assert_deep_equal_objects() {
        let actual = Value::object([("one", 10), ("two", 20)]);
        let expected = Value::object([("two", 20), ("one", 10)]);
        assert!(assert_deep_equal(actual, expected).is_ok());
    }

    #[test]
    fn test_assert_not_deep_equal() {
        assert!(assert_not_deep_equal(vec![1], vec![2]).is_ok());
        assert!(assert_not_deep_equal(vec![1], vec![1]).is_err());
    }

    // -- assert_contains / assert_length ---------------------------------------

    #[test]
    fn test_assert_contains_array() {
        assert!(assert_contains(vec![1, 2, 3, 4, 5, 6], 4).is_ok());
        let failure = assert_contains(vec![1, 2], 9).unwrap_err();
        assert!(failure.message.contains("does not contain"));
    }

    #[test]
    fn test_assert_contains_string() {
        assert!(assert_contains("aaa", "a").is_ok());
        assert!(assert_contains("bbb", "a").is_err());
        assert!(assert_contains("bbb", 1).is_err());
    }

    #[test]
    fn test_assert_contains_type_error() {
        let failure = assert_contains(5, 5).unwrap_err();
        assert!(failure.message.contains("expected array or string"));
    }

    #[test]
    fn test_assert_length() {
        assert!(assert_length(vec![1, 2, 3], 3).is_ok());
        assert!(assert_length("héllo", 5).is_ok());
        assert!(assert_length(Value::object([("a", 1)]), 1).is_ok());

        let failure = assert_length(vec![1], 5).unwrap_err();
        assert!(failure.message.contains("expected length 5"));
        assert!(assert_length(true, 1).is_err());
    }

    // -- assert_throws / assert_no_throw --------------------------------------

    #[test]
    fn test_assert_throws_passes_on_err() {
        assert!(assert_throws(|| parse_number("abc")).is_ok());
    }

    #[test]
    fn test_assert_throws_passes_on_panic() {
        let result = assert_throws(|| -> Result<(), String> { panic!("intentional") });
        assert!(result.is_ok());
    }

    #[test]
    fn test_assert_throws_fails_when_fn_succeeds() {
        let failure = assert_throws(|| parse_number("42")).unwrap_err();
        assert_eq!(failure.kind, AssertionKind::Throws);
        assert!(failure.message.contains("returned successfully"));
    }

    #[test]
    fn test_assert_no_throw() {
        assert!(assert_no_throw(|| parse_number("42")).is_ok());
        let failure = assert_no_throw(|| parse_number("x")).unwrap_err();
        assert!(failure.message.contains("threw"));
    }

    // -- assert_rejects -------------------------------------------------------

    #[tokio::test]
    async fn test_assert_rejects() {
        assert!(assert_rejects(async { parse_number("x") }).await.is_ok());
        let failure = assert_rejects(async { parse_number("1") }).await.unwrap_err();
        assert_eq!(failure.kind, AssertionKind::Rejects);
    }
}
