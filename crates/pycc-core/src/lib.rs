//! # pycc-core
//!
//! Core framework for orchestrating external code-quality tools.
//!
//! This crate provides the foundational traits and types. It includes:
//!
//! - [`Checker`] trait for a single probeable, runnable tool
//! - [`CommandChecker`], the checker that wraps an external executable
//! - [`CheckerRegistry`] for owning and looking up checkers by name
//! - [`Runner`] for executing a requested list of checkers in order
//! - [`CheckResult`], [`Summary`], and [`Report`] for outcomes
//! - [`Config`] and [`locate_config`] for finding and reading `pycc.toml`
//! - [`ConfigGenerator`] for scaffolding tool configuration files
//!
//! ## Example
//!
//! ```ignore
//! use pycc_core::{CheckerRegistry, CommandChecker, NoopObserver, Runner};
//!
//! let mut registry = CheckerRegistry::new();
//! registry.register(CommandChecker::new("black", "black").args(["--check", "."]));
//!
//! let runner = Runner::builder().project_path(".").build()?;
//! let results = runner.run(&registry, &["black"], &mut NoopObserver);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod command;
mod config;
mod discovery;
mod registry;
mod runner;
mod scaffold;
mod types;

/// Bounded subprocess execution used by [`CommandChecker`].
pub mod process;

pub use checker::{CheckContext, Checker, CheckerBox, ConfigTemplate, DEFAULT_CHECK_TIMEOUT};
pub use command::{CommandChecker, DEFAULT_PROBE_TIMEOUT};
pub use config::{CheckerConfig, Config, ConfigError, CustomCheckerConfig};
pub use discovery::{
    locate_config, user_config_dir, ConfigOrigin, CONFIG_DIR_ENV, PROJECT_CONFIG_FILES,
};
pub use registry::CheckerRegistry;
pub use runner::{NoopObserver, RunObserver, Runner, RunnerBuilder, RunnerError};
pub use scaffold::{ConfigGenerator, GenerateSummary, GeneratedFile, ScaffoldError};
pub use types::{CheckResult, CheckStatus, Report, Summary};
