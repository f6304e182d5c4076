//! JSON output for `vouch test --json` and `vouch list --json`

use serde_json::{json, Map, Value as JsonValue};
use vouch_runtime::{Registry, RunReport, TestResult};

/// Serialize a run report as a single JSON document
pub fn report_json(report: &RunReport) -> JsonValue {
    let summary = report.summary();
    let results: Vec<_> = report.results.iter().map(result_json).collect();

    json!({
        "tests": summary.total,
        "passed": summary.passed,
        "failed": summary.failed,
        "skipped": summary.skipped,
        "duration_ms": duration_ms(summary.duration),
        "results": results,
    })
}

fn result_json(result: &TestResult) -> JsonValue {
    let mut entry = Map::new();
    entry.insert("label".into(), json!(result.label));
    entry.insert("outcome".into(), json!(result.outcome.kind()));
    entry.insert("duration_ms".into(), json!(duration_ms(result.duration)));

    match result.outcome.error().map(|e| (e, e.as_assertion())) {
        // Expected/actual get their own fields, so only the message goes in `error`
        Some((_, Some(failure))) => {
            entry.insert("error".into(), json!(failure.message));
            if let Some(expected) = &failure.expected {
                entry.insert("expected".into(), JsonValue::from(expected));
            }
            if let Some(actual) = &failure.actual {
                entry.insert("actual".into(), JsonValue::from(actual));
            }
        }
        Some((error, None)) => {
            entry.insert("error".into(), json!(error.to_string()));
        }
        None => {}
    }

    JsonValue::Object(entry)
}

/// Serialize registered labels in order, marking pending placeholders
pub fn list_json(registry: &Registry) -> JsonValue {
    let cases: Vec<_> = registry
        .cases()
        .map(|case| json!({ "label": case.label(), "pending": case.is_pending() }))
        .collect();

    json!({
        "tests": registry.len(),
        "cases": cases,
    })
}

fn duration_ms(duration: std::time::Duration) -> u64 {
    duration.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use vouch_runtime::{AssertionFailure, AssertionKind, CaseError, Value};

    #[test]
    fn test_report_json_shape() {
        let mismatch = AssertionFailure::mismatch(
            AssertionKind::DeepEqual,
            "assert_deep_equal: values differ",
            Value::array([1, 2]),
            Value::array([1, 3]),
        );
        let report = RunReport::new(
            vec![
                TestResult::passed("sum", Duration::from_millis(3)),
                TestResult::failed("deep", mismatch.into(), Duration::from_millis(1)),
                TestResult::failed(
                    "io",
                    CaseError::unhandled("disk full"),
                    Duration::from_millis(1),
                ),
                TestResult::skipped("later"),
            ],
            Duration::from_millis(5),
        );

        let doc = report_json(&report);
        assert_eq!(doc["tests"], 4);
        assert_eq!(doc["passed"], 1);
        assert_eq!(doc["failed"], 2);
        assert_eq!(doc["skipped"], 1);
        assert_eq!(doc["duration_ms"], 5);

        let results = doc["results"].as_array().unwrap();
        assert_eq!(results[0], json!({"label": "sum", "outcome": "passed", "duration_ms": 3}));
        assert_eq!(
            results[1],
            json!({
                "label": "deep",
                "outcome": "failed",
                "duration_ms": 1,
                "error": "assert_deep_equal: values differ",
                "expected": [1, 3],
                "actual": [1, 2],
            })
        );
        assert_eq!(results[2]["error"], "disk full");
        assert!(results[2].get("expected").is_none());
        assert_eq!(results[3]["outcome"], "skipped");
    }

    #[test]
    fn test_list_json_marks_pending() {
        let mut registry = Registry::new();
        registry.register("sum", || Ok(())).register_pending("Maps");

        let doc = list_json(&registry);
        assert_eq!(
            doc,
            json!({
                "tests": 2,
                "cases": [
                    {"label": "sum", "pending": false},
                    {"label": "Maps", "pending": true},
                ],
            })
        );
    }
}
