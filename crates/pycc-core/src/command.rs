//! Checker backed by an external command-line tool.

use crate::checker::{CheckContext, Checker, ConfigTemplate};
use crate::process::{run_with_timeout, ProcessError};
use crate::types::CheckResult;
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::debug;

/// Time budget for the `--version` availability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A checker that runs `command args...` inside the project directory.
///
/// Exit code 0 maps to passed, any other exit code to failed; launch
/// failures and timeouts map to error.
#[derive(Debug, Clone)]
pub struct CommandChecker {
    name: String,
    description: String,
    command: String,
    args: Vec<String>,
    version_args: Vec<String>,
    probe_timeout: Duration,
    timeout: Option<Duration>,
    config_files: Vec<ConfigTemplate>,
}

impl CommandChecker {
    /// Creates a checker named `name` that runs `command` with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            command: command.into(),
            args: Vec::new(),
            version_args: vec!["--version".to_string()],
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            timeout: None,
            config_files: Vec::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the arguments passed on every check.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the arguments used by the availability probe.
    #[must_use]
    pub fn version_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the time budget for the availability probe.
    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Pins this checker's time budget, ignoring the caller's default.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a scaffoldable configuration file.
    #[must_use]
    pub fn config_file(mut self, template: ConfigTemplate) -> Self {
        self.config_files.push(template);
        self
    }

    /// Executable name.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments passed on every check.
    #[must_use]
    pub fn command_args(&self) -> &[String] {
        &self.args
    }

    fn effective_timeout(&self, ctx: &CheckContext<'_>) -> Duration {
        self.timeout.unwrap_or_else(|| ctx.timeout())
    }
}

impl Checker for CommandChecker {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_available(&self) -> bool {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.version_args);

        match run_with_timeout(cmd, self.probe_timeout) {
            Ok(output) => output.success(),
            Err(e) => {
                debug!("{} unavailable: {}", self.name, e);
                false
            }
        }
    }

    fn check(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let timeout = self.effective_timeout(ctx);
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args).current_dir(ctx.project_path());

        let start = Instant::now();
        match run_with_timeout(cmd, timeout) {
            Ok(out) if out.success() => CheckResult::passed(&self.name, out.stdout, out.elapsed),
            Ok(out) => CheckResult::failed(&self.name, out.stdout, out.stderr, out.elapsed),
            Err(ProcessError::TimedOut { elapsed, .. }) => CheckResult::error(
                &self.name,
                format!("Check timed out after {} seconds", timeout.as_secs()),
                elapsed,
            ),
            Err(e) => CheckResult::error(&self.name, e.to_string(), start.elapsed()),
        }
    }

    fn config_files(&self) -> Vec<ConfigTemplate> {
        self.config_files.clone()
    }
}
