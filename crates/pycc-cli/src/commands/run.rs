//! Run command implementation.

use anyhow::{bail, Context, Result};
use pycc_checkers::{checkers_for_categories, Category};
use pycc_core::{
    CheckResult, CheckerRegistry, Config, NoopObserver, Report, Runner, DEFAULT_CHECK_TIMEOUT,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::output::{write_summary, ProgressPrinter, WarningPrinter};

/// Which checkers the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every checker whose tool is installed.
    All,
    /// Checkers named on the command line.
    Named(Vec<String>),
    /// The union of one or more categories.
    Categories(Vec<Category>),
}

impl Selection {
    /// Resolves the selection to checker names, in run order.
    ///
    /// # Errors
    ///
    /// Fails when nothing was selected or a named checker is not registered.
    pub fn resolve(&self, registry: &CheckerRegistry) -> Result<Vec<String>> {
        match self {
            Self::All => Ok(registry
                .get_available_checkers()
                .into_iter()
                .map(|c| c.name().to_string())
                .collect()),
            Self::Named(names) => {
                let unknown: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !registry.contains(name))
                    .collect();
                if !unknown.is_empty() {
                    bail!(
                        "Unknown checker(s): {}. Use --list to see available checkers.",
                        unknown.join(", ")
                    );
                }

                let mut selected: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    if !selected.contains(name) {
                        selected.push(name.clone());
                    }
                }
                Ok(selected)
            }
            Self::Categories(categories) => {
                if categories.is_empty() {
                    bail!("No checkers selected. Use --all, --check, or specify categories.");
                }
                // Checkers disabled in config are left out quietly.
                Ok(checkers_for_categories(categories)
                    .into_iter()
                    .filter(|name| registry.contains(name))
                    .map(String::from)
                    .collect())
            }
        }
    }
}

/// Options for a check run.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    /// Directory to run checks in.
    pub project_path: PathBuf,
    /// Per-check timeout from the command line.
    pub timeout: Option<Duration>,
    /// Show captured stderr of failed checks.
    pub verbose: bool,
    /// Suppress progress and summary text.
    pub quiet: bool,
    /// Print the JSON report instead of text.
    pub json: bool,
    /// Colorize text output.
    pub color: bool,
}

impl RunOptions {
    /// Command line wins over config, which wins over the built-in default.
    fn effective_timeout(&self, config: &Config) -> Duration {
        self.timeout
            .or_else(|| config.default_timeout())
            .unwrap_or(DEFAULT_CHECK_TIMEOUT)
    }
}

/// Runs the selected checks and exits non-zero if any failed or errored.
pub fn run(
    registry: &CheckerRegistry,
    config: &Config,
    selection: &Selection,
    options: &RunOptions,
) -> Result<()> {
    let runner = Runner::builder()
        .project_path(&options.project_path)
        .timeout(options.effective_timeout(config))
        .build()?;

    let names = selection.resolve(registry)?;
    tracing::info!("Selected checkers: {}", names.join(", "));

    let results = execute(&runner, registry, &names, options);
    let report = Report::new(runner.project_path(), results);

    if options.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else if !options.quiet {
        write_summary(&mut io::stdout().lock(), &report.summary, options.color)?;
    }

    if !report.summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn execute(
    runner: &Runner,
    registry: &CheckerRegistry,
    names: &[String],
    options: &RunOptions,
) -> Vec<CheckResult> {
    if options.quiet {
        runner.run(registry, names, &mut NoopObserver)
    } else if options.json {
        runner.run(registry, names, &mut WarningPrinter)
    } else {
        let mut printer = ProgressPrinter::new(io::stdout().lock(), options.verbose, options.color);
        runner.run(registry, names, &mut printer)
    }
}
