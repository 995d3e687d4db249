//! # pycc
//!
//! Runs external Python code quality tools (formatters, linters, type
//! checkers, security scanners) against a project and aggregates the
//! outcome.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in checkers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pycc::{NoopObserver, Project};
//!
//! let project = Project::open(".")?;
//! let report = project.run(&["black", "flake8"], &mut NoopObserver);
//! println!("{}", report.to_json()?);
//! ```
//!
//! ## Custom Checkers
//!
//! Any type implementing [`Checker`] can be registered before a run:
//!
//! ```rust,ignore
//! use pycc::{CheckContext, CheckResult, Checker, Project};
//!
//! struct NoPrint;
//!
//! impl Checker for NoPrint {
//!     fn name(&self) -> &str { "no-print" }
//!     fn is_available(&self) -> bool { true }
//!     fn check(&self, ctx: &CheckContext<'_>) -> CheckResult {
//!         let start = std::time::Instant::now();
//!         // scan ctx.project_path() ...
//!         CheckResult::passed("no-print", "", start.elapsed())
//!     }
//! }
//!
//! let mut project = Project::open(".")?;
//! project.register(NoPrint);
//! ```
//!
//! Command-line tools can also be declared without code, in `pycc.toml`:
//!
//! ```toml
//! [[custom]]
//! name = "ruff"
//! command = "ruff"
//! args = ["check", "."]
//! ```

#![forbid(unsafe_code)]

pub use pycc_core::*;

/// Built-in checkers and categories.
pub mod checkers {
    pub use pycc_checkers::*;
}

mod project;

pub use project::{Project, ProjectError};
