//! Test reporter - display test results

use colored::*;
use std::io::{self, Write};
use vouch_runtime::{RunReport, TestOutcome, TestResult};

/// Test reporter with output configuration
#[derive(Debug, Default)]
pub struct TestReporter {
    /// Show one line per case instead of dots
    verbose: bool,
}

impl TestReporter {
    /// Create a new test reporter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Report test results to stdout
    pub fn report(&self, report: &RunReport) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out, report)?;
        out.flush()
    }

    /// Render the full report: per-case lines, summary, then failure details
    pub fn write_report<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        for result in &report.results {
            self.write_test_result(out, result)?;
        }

        // Dots need a newline before the summary
        if !self.verbose && !report.is_empty() {
            writeln!(out)?;
        }

        writeln!(out)?;
        self.write_summary(out, report)?;
        self.write_failures(out, report)
    }

    /// Write a single test result
    fn write_test_result<W: Write>(&self, out: &mut W, result: &TestResult) -> io::Result<()> {
        match (&result.outcome, self.verbose) {
            (TestOutcome::Passed, true) => writeln!(
                out,
                "{} {} ({:.2?})",
                "PASS".green().bold(),
                result.label,
                result.duration
            ),
            (TestOutcome::Failed(_), true) => writeln!(
                out,
                "{} {} ({:.2?})",
                "FAIL".red().bold(),
                result.label,
                result.duration
            ),
            (TestOutcome::Skipped, true) => {
                writeln!(out, "{} {}", "SKIP".yellow().bold(), result.label)
            }
            (TestOutcome::Passed, false) => write!(out, "{}", ".".green()),
            (TestOutcome::Failed(_), false) => write!(out, "{}", "F".red().bold()),
            (TestOutcome::Skipped, false) => write!(out, "{}", "S".yellow()),
        }
    }

    /// Write summary statistics
    fn write_summary<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        let summary = report.summary();

        writeln!(out, "{}", "─".repeat(50))?;

        let status = if summary.is_success() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };

        writeln!(
            out,
            "Test result: {} | {} total, {} passed, {} failed, {} skipped",
            status,
            summary.total.to_string().bold(),
            summary.passed.to_string().green().bold(),
            if summary.failed > 0 {
                summary.failed.to_string().red().bold()
            } else {
                summary.failed.to_string().normal()
            },
            summary.skipped.to_string().yellow()
        )?;
        writeln!(out, "Time: {:.2?}", summary.duration)
    }

    /// Write details of failed tests
    fn write_failures<W: Write>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        let mut failures = report.failures().peekable();
        if failures.peek().is_none() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", "Failures:".red().bold())?;
        writeln!(out)?;

        for result in failures {
            writeln!(out, "  {} {}", "●".red(), result.label.bold())?;
            if let Some(error) = result.outcome.error() {
                for line in error.to_string().lines() {
                    writeln!(out, "      {}", line.dimmed())?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vouch_runtime::{AssertionFailure, AssertionKind, CaseError, Value};

    fn sample_report() -> RunReport {
        let mismatch = AssertionFailure::mismatch(
            AssertionKind::Equal,
            "assert_equal: values differ",
            Value::from(1),
            Value::from(2),
        );
        RunReport::new(
            vec![
                TestResult::passed("sum", Duration::from_millis(10)),
                TestResult::failed("mismatch", mismatch.into(), Duration::from_millis(2)),
                TestResult::skipped("placeholder"),
            ],
            Duration::from_millis(15),
        )
    }

    fn render(reporter: &TestReporter, report: &RunReport) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        reporter.write_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dots_summary_and_failures() {
        let output = render(&TestReporter::new(false), &sample_report());
        insta::assert_snapshot!(output, @r"
        .FS

        ──────────────────────────────────────────────────
        Test result: FAILED | 3 total, 1 passed, 1 failed, 1 skipped
        Time: 15.00ms

        Failures:

          ● mismatch
              assert_equal: values differ
                Actual:   1
                Expected: 2
        ");
    }

    #[test]
    fn test_verbose_lines() {
        let output = render(&TestReporter::new(true), &sample_report());
        assert!(output.contains("PASS sum (10.00ms)"));
        assert!(output.contains("FAIL mismatch (2.00ms)"));
        assert!(output.contains("SKIP placeholder"));
        assert!(!output.starts_with('.'));
    }

    #[test]
    fn test_all_passed_has_no_failures_section() {
        let report = RunReport::new(
            vec![
                TestResult::passed("a", Duration::from_millis(1)),
                TestResult::skipped("b"),
            ],
            Duration::from_millis(1),
        );
        let output = render(&TestReporter::default(), &report);
        assert!(output.contains("Test result: PASSED | 2 total, 1 passed, 0 failed, 1 skipped"));
        assert!(!output.contains("Failures:"));
    }

    #[test]
    fn test_non_assertion_failure_detail() {
        let report = RunReport::new(
            vec![TestResult::failed(
                "panics",
                CaseError::Panicked {
                    message: "boom".to_string(),
                },
                Duration::from_millis(1),
            )],
            Duration::from_millis(1),
        );
        let output = render(&TestReporter::new(true), &report);
        assert!(output.contains("  ● panics\n      panicked: boom\n"));
    }

    #[test]
    fn test_empty_report() {
        let output = render(&TestReporter::new(false), &RunReport::default());
        assert!(output.starts_with("\n─"));
        assert!(output.contains("0 total"));
    }
}
