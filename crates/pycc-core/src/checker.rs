//! The checker capability trait and its call context.

use crate::types::CheckResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default per-check time budget.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(300);

/// A code-quality tool that can be probed, run, and scaffolded.
///
/// The built-in tools are all [`CommandChecker`](crate::CommandChecker)s.
/// Implement this trait directly to plug in a checker with custom logic,
/// then register it before running.
///
/// # Example
///
/// ```ignore
/// use pycc_core::{CheckContext, CheckResult, Checker};
///
/// pub struct AlwaysGreen;
///
/// impl Checker for AlwaysGreen {
///     fn name(&self) -> &str { "always-green" }
///     fn is_available(&self) -> bool { true }
///     fn check(&self, ctx: &CheckContext<'_>) -> CheckResult {
///         CheckResult::passed(self.name(), "", std::time::Duration::ZERO)
///     }
/// }
/// ```
pub trait Checker: Send + Sync {
    /// Stable, unique key used for registration and selection.
    fn name(&self) -> &str;

    /// Human-readable description shown in listings.
    fn description(&self) -> &str {
        ""
    }

    /// Probes whether the underlying tool is usable.
    ///
    /// Must be side-effect free and bounded in time. Every failure mode
    /// collapses to `false`.
    fn is_available(&self) -> bool;

    /// Runs the check against `ctx.project_path()`.
    ///
    /// Failures are reported through the returned status, never by panicking.
    fn check(&self, ctx: &CheckContext<'_>) -> CheckResult;

    /// Configuration files this checker can scaffold into a project.
    fn config_files(&self) -> Vec<ConfigTemplate> {
        Vec::new()
    }
}

/// Type alias for boxed [`Checker`] trait objects.
pub type CheckerBox = Box<dyn Checker>;

/// Per-invocation inputs handed to [`Checker::check`].
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    project_path: &'a Path,
    timeout: Duration,
}

impl<'a> CheckContext<'a> {
    /// Creates a context with the default timeout.
    #[must_use]
    pub fn new(project_path: &'a Path) -> Self {
        Self {
            project_path,
            timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    /// Overrides the time budget.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directory the check runs in.
    #[must_use]
    pub fn project_path(&self) -> &'a Path {
        self.project_path
    }

    /// Caller-configured time budget for one check.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// A configuration file a checker can write into a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigTemplate {
    /// File name relative to the project root (e.g. `pyproject.toml`).
    pub filename: String,
    /// Verbatim file content, or the section contributed to a shared file.
    pub content: String,
    /// What this template configures.
    pub description: String,
}

impl ConfigTemplate {
    /// Creates a new template.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestChecker;

    impl Checker for TestChecker {
        fn name(&self) -> &str {
            "test-checker"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn check(&self, ctx: &CheckContext<'_>) -> CheckResult {
            CheckResult::passed(
                self.name(),
                ctx.project_path().display().to_string(),
                Duration::ZERO,
            )
        }
    }

    #[test]
    fn trait_defaults() {
        let checker = TestChecker;
        assert_eq!(checker.description(), "");
        assert!(checker.config_files().is_empty());
    }

    #[test]
    fn context_carries_path_and_timeout() {
        let ctx = CheckContext::new(Path::new("/proj"));
        assert_eq!(ctx.timeout(), DEFAULT_CHECK_TIMEOUT);

        let ctx = ctx.with_timeout(Duration::from_secs(7));
        assert_eq!(ctx.timeout(), Duration::from_secs(7));
        assert_eq!(TestChecker.check(&ctx).output(), "/proj");
    }
}
