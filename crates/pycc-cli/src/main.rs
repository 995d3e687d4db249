//! pycc CLI tool.
//!
//! Usage:
//! ```bash
//! pycc --all
//! pycc --format --lint
//! pycc --check black flake8
//! pycc --list
//! pycc --generate-config
//! ```

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use miette::{GraphicalReportHandler, GraphicalTheme};
use pycc_checkers::{configured_registry, Category};
use pycc_core::{locate_config, CheckerRegistry, Config, ConfigOrigin, RunnerError};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::run::{RunOptions, Selection};

const EXAMPLES: &str = "\
Examples:
  pycc --all                    # Run all available checks
  pycc --format --lint          # Run formatting and linting checks
  pycc --generate-config        # Generate configuration files
  pycc --list                   # List all available checkers
  pycc --check black flake8     # Run specific checkers";

/// Python Code Checker - runs Python code quality tools against a project
#[derive(Parser)]
#[command(name = "pycc")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("action")
        .args(["all", "check", "list", "generate_config"])
        .multiple(false)
))]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Run all available checks
    #[arg(short, long)]
    all: bool,

    /// Run specific checkers
    #[arg(short, long, num_args = 1.., value_name = "CHECKER")]
    check: Vec<String>,

    /// List all available checkers
    #[arg(short, long)]
    list: bool,

    /// Generate configuration files for all checkers
    #[arg(short, long)]
    generate_config: bool,

    /// Run formatting checks (black, isort)
    #[arg(short, long, help_heading = "Check Categories")]
    format: bool,

    /// Run linting checks (flake8, pylint)
    #[arg(long, help_heading = "Check Categories")]
    lint: bool,

    /// Run type checking (mypy)
    #[arg(short = 't', long = "type", help_heading = "Check Categories")]
    type_check: bool,

    /// Run security checks (bandit, safety)
    #[arg(short, long, help_heading = "Check Categories")]
    security: bool,

    /// Run documentation checks (pydocstyle)
    #[arg(short, long, help_heading = "Check Categories")]
    docs: bool,

    /// Run complexity checks (vulture, radon)
    #[arg(short = 'x', long, help_heading = "Check Categories")]
    complexity: bool,

    /// Project path to check
    #[arg(short, long, default_value = ".")]
    project_path: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress output except for errors
    #[arg(short, long)]
    quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Timeout for each check in seconds [default: 300]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Overwrite existing files when generating configuration
    #[arg(long, requires = "generate_config")]
    force: bool,
}

impl Cli {
    fn categories(&self) -> Vec<Category> {
        [
            (self.format, Category::Format),
            (self.lint, Category::Lint),
            (self.type_check, Category::Type),
            (self.security, Category::Security),
            (self.docs, Category::Docs),
            (self.complexity, Category::Complexity),
        ]
        .into_iter()
        .filter_map(|(selected, category)| selected.then_some(category))
        .collect()
    }

    fn selection(&self) -> Selection {
        if self.all {
            Selection::All
        } else if !self.check.is_empty() {
            Selection::Named(self.check.clone())
        } else {
            Selection::Categories(self.categories())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", render_error(&err, color_enabled_on_stderr()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let origin = locate_config(&cli.project_path, cli.config.as_deref());
    let config = load_config(origin.as_ref())?;
    let registry = build_registry(&config)?;

    if cli.list {
        return commands::list::run(&registry, color_enabled(false));
    }

    if cli.generate_config {
        return commands::generate::run(&registry, &cli.project_path, cli.force);
    }

    let options = RunOptions {
        project_path: cli.project_path.clone(),
        timeout: cli.timeout.map(std::time::Duration::from_secs),
        verbose: cli.verbose,
        quiet: cli.quiet,
        json: cli.json,
        color: color_enabled(cli.json),
    };

    commands::run::run(&registry, &config, &cli.selection(), &options)
}

fn load_config(origin: Option<&ConfigOrigin>) -> Result<Config> {
    let Some(origin) = origin else {
        return Ok(Config::default());
    };
    if let ConfigOrigin::User(path) = origin {
        tracing::info!("Using global config: {}", path.display());
    }
    origin
        .load()
        .with_context(|| format!("Failed to load config: {}", origin.path().display()))
}

fn build_registry(config: &Config) -> Result<CheckerRegistry> {
    let registry = configured_registry(config).context("Invalid checker configuration")?;
    tracing::debug!("Registered {} checker(s)", registry.len());
    Ok(registry)
}

fn color_enabled(json: bool) -> bool {
    !json && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn color_enabled_on_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Formats a fatal error for stderr.
///
/// Errors carrying a diagnostic code are rendered through miette; everything
/// else prints its context chain.
fn render_error(err: &anyhow::Error, color: bool) -> String {
    if let Some(diagnostic) = err.downcast_ref::<RunnerError>() {
        let theme = if color {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        let mut out = String::new();
        if GraphicalReportHandler::new_themed(theme)
            .render_report(&mut out, diagnostic)
            .is_ok()
        {
            return out;
        }
    }
    format!("Error: {err:?}\n")
}
