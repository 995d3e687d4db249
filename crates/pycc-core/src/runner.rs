//! Sequential execution of requested checkers.

use crate::checker::{CheckContext, Checker, DEFAULT_CHECK_TIMEOUT};
use crate::registry::CheckerRegistry;
use crate::types::CheckResult;

use miette::Diagnostic;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that prevent a run from starting.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The project path does not exist.
    #[error("Project path '{}' does not exist.", .0.display())]
    #[diagnostic(code(pycc::project_path::missing))]
    MissingProjectPath(PathBuf),

    /// The project path exists but is not a directory.
    #[error("Project path '{}' is not a directory.", .0.display())]
    #[diagnostic(code(pycc::project_path::not_a_directory))]
    NotADirectory(PathBuf),
}

/// Receives progress while a run is in flight.
///
/// Callbacks fire synchronously, interleaved with execution: `on_result`
/// for a checker is called before the next checker starts.
pub trait RunObserver {
    /// A checker is about to execute.
    fn on_start(&mut self, _name: &str) {}

    /// A result was produced (including skips).
    fn on_result(&mut self, _result: &CheckResult) {}

    /// A non-fatal problem, such as an unknown checker name.
    fn on_warning(&mut self, _message: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Builder for configuring a [`Runner`].
#[derive(Debug, Default)]
pub struct RunnerBuilder {
    project_path: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl RunnerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory checks run in (default: current directory).
    #[must_use]
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    /// Sets the per-check time budget (default: 300 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the project path is missing or not a directory.
    pub fn build(self) -> Result<Runner, RunnerError> {
        let project_path = self.project_path.unwrap_or_else(|| PathBuf::from("."));

        if !project_path.exists() {
            return Err(RunnerError::MissingProjectPath(project_path));
        }
        if !project_path.is_dir() {
            return Err(RunnerError::NotADirectory(project_path));
        }

        Ok(Runner {
            project_path,
            timeout: self.timeout.unwrap_or(DEFAULT_CHECK_TIMEOUT),
        })
    }
}

/// Runs checkers one after another and collects their results.
///
/// Use [`Runner::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Runner {
    project_path: PathBuf,
    timeout: Duration,
}

impl Runner {
    /// Creates a new builder for configuring a runner.
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Directory checks run in.
    #[must_use]
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Per-check time budget.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `names` in order and returns one result per known name.
    ///
    /// - Unknown names produce a warning and no result.
    /// - Unavailable checkers produce a skipped result and are not executed.
    /// - Everything else is executed; a panic inside a checker becomes an
    ///   error result and the run continues.
    pub fn run<S: AsRef<str>>(
        &self,
        registry: &CheckerRegistry,
        names: &[S],
        observer: &mut dyn RunObserver,
    ) -> Vec<CheckResult> {
        info!(
            "Running {} checker(s) in {}",
            names.len(),
            self.project_path.display()
        );

        let ctx = CheckContext::new(&self.project_path).with_timeout(self.timeout);
        let mut results = Vec::with_capacity(names.len());

        for name in names.iter().map(AsRef::as_ref) {
            let Some(checker) = registry.get_checker(name) else {
                warn!("Checker '{}' not found", name);
                observer.on_warning(&format!("Checker '{name}' not found"));
                continue;
            };

            let result = if probe(checker) {
                observer.on_start(name);
                execute(checker, &ctx)
            } else {
                observer.on_warning(&format!(
                    "Checker '{name}' is not available (not installed)"
                ));
                CheckResult::skipped(name, format!("Checker '{name}' is not available"))
            };

            debug!("{} -> {}", name, result.status());
            observer.on_result(&result);
            results.push(result);
        }

        results
    }
}

fn probe(checker: &dyn Checker) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| checker.is_available())).unwrap_or_else(|payload| {
        warn!(
            "Availability probe for {} panicked: {}",
            checker.name(),
            panic_message(payload.as_ref())
        );
        false
    })
}

fn execute(checker: &dyn Checker, ctx: &CheckContext<'_>) -> CheckResult {
    let start = Instant::now();
    panic::catch_unwind(AssertUnwindSafe(|| checker.check(ctx))).unwrap_or_else(|payload| {
        CheckResult::error(
            checker.name(),
            format!("Unexpected error: {}", panic_message(payload.as_ref())),
            start.elapsed(),
        )
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "checker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckStatus;

    struct Scripted {
        name: &'static str,
        available: bool,
        status: CheckStatus,
    }

    impl Checker for Scripted {
        fn name(&self) -> &str {
            self.name
        }
        fn is_available(&self) -> bool {
            self.available
        }
        fn check(&self, _ctx: &CheckContext<'_>) -> CheckResult {
            match self.status {
                CheckStatus::Passed => CheckResult::passed(self.name, "ok", Duration::ZERO),
                CheckStatus::Failed => {
                    CheckResult::failed(self.name, "findings", "stderr", Duration::ZERO)
                }
                CheckStatus::Error => CheckResult::error(self.name, "broken", Duration::ZERO),
                CheckStatus::Skipped => unreachable!("scripted checkers never skip"),
            }
        }
    }

    struct Panicking;

    impl Checker for Panicking {
        fn name(&self) -> &str {
            "panics"
        }
        fn is_available(&self) -> bool {
            true
        }
        fn check(&self, _ctx: &CheckContext<'_>) -> CheckResult {
            panic!("index out of bounds")
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl RunObserver for Recorder {
        fn on_start(&mut self, name: &str) {
            self.events.push(format!("start {name}"));
        }
        fn on_result(&mut self, result: &CheckResult) {
            self.events
                .push(format!("result {} {}", result.name(), result.status()));
        }
        fn on_warning(&mut self, message: &str) {
            self.events.push(format!("warn {message}"));
        }
    }

    fn runner() -> Runner {
        Runner::builder()
            .project_path(std::env::temp_dir())
            .build()
            .unwrap()
    }

    fn scripted(name: &'static str, available: bool, status: CheckStatus) -> Scripted {
        Scripted {
            name,
            available,
            status,
        }
    }

    #[test]
    fn unknown_names_warn_and_are_dropped() {
        let mut registry = CheckerRegistry::new();
        registry.register(scripted("fmt", true, CheckStatus::Passed));
        registry.register(scripted("lint", false, CheckStatus::Passed));

        let mut recorder = Recorder::default();
        let results = runner().run(&registry, &["fmt", "lint", "missing"], &mut recorder);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name(), "fmt");
        assert_eq!(results[0].status(), CheckStatus::Passed);
        assert_eq!(results[1].name(), "lint");
        assert_eq!(results[1].status(), CheckStatus::Skipped);
        assert_eq!(results[1].duration(), 0.0);
        assert!(recorder
            .events
            .contains(&"warn Checker 'missing' not found".to_string()));
    }

    #[test]
    fn preserves_request_order_and_interleaves_progress() {
        let mut registry = CheckerRegistry::new();
        registry.register(scripted("a", true, CheckStatus::Failed));
        registry.register(scripted("b", false, CheckStatus::Passed));
        registry.register(scripted("c", true, CheckStatus::Passed));

        let mut recorder = Recorder::default();
        let results = runner().run(&registry, &["c", "b", "a"], &mut recorder);

        let names: Vec<&str> = results.iter().map(CheckResult::name).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        assert_eq!(
            recorder.events,
            vec![
                "start c",
                "result c passed",
                "warn Checker 'b' is not available (not installed)",
                "result b skipped",
                "start a",
                "result a failed",
            ]
        );
    }

    #[test]
    fn panic_becomes_error_and_run_continues() {
        let mut registry = CheckerRegistry::new();
        registry.register(Panicking);
        registry.register(scripted("after", true, CheckStatus::Passed));

        let results = runner().run(&registry, &["panics", "after"], &mut NoopObserver);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status(), CheckStatus::Error);
        assert_eq!(
            results[0].error_text(),
            "Unexpected error: index out of bounds"
        );
        assert_eq!(results[1].status(), CheckStatus::Passed);
    }

    #[test]
    fn builder_rejects_missing_path() {
        let err = Runner::builder()
            .project_path("/definitely/not/a/real/path")
            .build()
            .unwrap_err();
        assert!(matches!(err, RunnerError::MissingProjectPath(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn builder_rejects_file_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Runner::builder()
            .project_path(file.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, RunnerError::NotADirectory(_)));
    }

    #[test]
    fn builder_defaults() {
        let runner = Runner::builder().build().unwrap();
        assert_eq!(runner.timeout(), DEFAULT_CHECK_TIMEOUT);
        assert_eq!(runner.project_path(), Path::new("."));
    }
}
