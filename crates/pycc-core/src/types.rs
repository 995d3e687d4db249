//! Core types for check outcomes and aggregate reports.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Outcome of a single checker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The tool ran and reported no findings.
    Passed,
    /// The tool ran and reported findings (non-zero exit).
    Failed,
    /// The tool was not executed.
    Skipped,
    /// The tool could not be run or timed out.
    Error,
}

impl CheckStatus {
    /// Returns true if this status makes the overall run fail.
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Error)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Result of running one checker.
///
/// Produced once and never mutated; fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    name: String,
    status: CheckStatus,
    duration: f64,
    output: String,
    error: String,
}

impl CheckResult {
    /// Creates a result with explicit values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: CheckStatus,
        output: impl Into<String>,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            duration: duration.as_secs_f64(),
            output: output.into(),
            error: error.into(),
        }
    }

    /// A passing result; the error field is always empty.
    #[must_use]
    pub fn passed(name: impl Into<String>, output: impl Into<String>, duration: Duration) -> Self {
        Self::new(name, CheckStatus::Passed, output, String::new(), duration)
    }

    /// A failing result carrying the tool's stdout and stderr.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        output: impl Into<String>,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self::new(name, CheckStatus::Failed, output, error, duration)
    }

    /// An execution error (timeout, launch failure, panic).
    #[must_use]
    pub fn error(name: impl Into<String>, error: impl Into<String>, duration: Duration) -> Self {
        Self::new(name, CheckStatus::Error, String::new(), error, duration)
    }

    /// A result for a checker that was never executed.
    #[must_use]
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            name,
            CheckStatus::Skipped,
            String::new(),
            reason,
            Duration::ZERO,
        )
    }

    /// Checker identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outcome status.
    #[must_use]
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Captured standard output.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Captured standard error, failure description, or skip reason.
    #[must_use]
    pub fn error_text(&self) -> &str {
        &self.error
    }

    /// Elapsed wall-clock seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Per-status counts over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of results.
    pub total: usize,
    /// Results with [`CheckStatus::Passed`].
    pub passed: usize,
    /// Results with [`CheckStatus::Failed`].
    pub failed: usize,
    /// Results with [`CheckStatus::Error`].
    pub error: usize,
    /// Results with [`CheckStatus::Skipped`].
    pub skipped: usize,
}

impl Summary {
    /// Counts results by status.
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        results.iter().fold(
            Self {
                total: results.len(),
                ..Self::default()
            },
            |mut acc, r| {
                match r.status() {
                    CheckStatus::Passed => acc.passed += 1,
                    CheckStatus::Failed => acc.failed += 1,
                    CheckStatus::Error => acc.error += 1,
                    CheckStatus::Skipped => acc.skipped += 1,
                }
                acc
            },
        )
    }

    /// True when nothing failed or errored. Skipped results do not count.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed + self.error == 0
    }

    /// Number of results that make the run fail.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failed + self.error
    }
}

/// Aggregate report of a run, serialized as the structured JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Directory the checks ran in.
    pub project_path: PathBuf,
    /// UNIX timestamp (seconds) when the report was built.
    pub timestamp: f64,
    /// Results in request order.
    pub results: Vec<CheckResult>,
    /// Per-status counts.
    pub summary: Summary,
}

impl Report {
    /// Builds a report stamped with the current time.
    #[must_use]
    pub fn new(project_path: &Path, results: Vec<CheckResult>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64());
        let summary = Summary::from_results(&results);
        Self {
            project_path: project_path.to_path_buf(),
            timestamp,
            results,
            summary,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<CheckResult> {
        vec![
            CheckResult::passed("black", "", Duration::from_millis(1500)),
            CheckResult::failed("flake8", "E501", "", Duration::from_secs(2)),
            CheckResult::error("mypy", "boom", Duration::ZERO),
            CheckResult::skipped("safety", "Checker 'safety' is not available"),
        ]
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CheckStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
        assert_eq!(CheckStatus::Error.to_string(), "error");
    }

    #[test]
    fn skipped_result_is_never_executed() {
        let r = CheckResult::skipped("lint", "not installed");
        assert_eq!(r.status(), CheckStatus::Skipped);
        assert_eq!(r.duration(), 0.0);
        assert!(r.output().is_empty());
        assert_eq!(r.error_text(), "not installed");
    }

    #[test]
    fn passed_result_has_empty_error() {
        let r = CheckResult::passed("fmt", "ok", Duration::from_millis(10));
        assert!(r.error_text().is_empty());
        assert!((r.duration() - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_counts_partition_total() {
        let summary = Summary::from_results(&sample_results());
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.passed + summary.failed + summary.error + summary.skipped,
            summary.total
        );
        assert_eq!(summary.failures(), 2);
        assert!(!summary.is_success());
    }

    #[test]
    fn skipped_only_is_success() {
        let summary = Summary::from_results(&[CheckResult::skipped("a", "")]);
        assert!(summary.is_success());
        assert!(Summary::from_results(&[]).is_success());
    }

    #[test]
    fn report_json_has_documented_shape() {
        let report = Report::new(Path::new("/tmp/project"), sample_results());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["project_path"], "/tmp/project");
        assert!(value["timestamp"].as_f64().unwrap() > 0.0);
        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert_eq!(value["results"][1]["status"], "failed");
        assert_eq!(value["results"][0]["duration"], 1.5);
        assert_eq!(value["summary"]["total"], 4);
        assert_eq!(value["summary"]["skipped"], 1);
    }
}
