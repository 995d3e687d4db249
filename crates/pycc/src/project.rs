//! A project directory with its resolved configuration and checker registry.

use pycc_checkers::configured_registry;
use pycc_core::{
    Checker, CheckerRegistry, Config, ConfigError, Report, RunObserver, Runner, RunnerError,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors opening or running a [`Project`].
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project's config file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The project path is unusable.
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// Checks ready to run against one project.
///
/// Opening a project loads the config the `pycc` binary would use (the
/// project's `pycc.toml`, else the user config) and registers the built-in
/// checkers adjusted by it. Further checkers can be registered before
/// running.
#[derive(Debug)]
pub struct Project {
    runner: Runner,
    registry: CheckerRegistry,
}

impl Project {
    /// Opens the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory or its config file is
    /// invalid.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ProjectError> {
        let root = root.into();
        let config = Config::discover(&root, None)?;
        Self::with_config(root, &config)
    }

    /// Opens the project rooted at `root` with an already loaded `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory or `config` names an
    /// unknown checker.
    pub fn with_config(root: impl Into<PathBuf>, config: &Config) -> Result<Self, ProjectError> {
        let root = root.into();
        let mut builder = Runner::builder().project_path(&root);
        if let Some(timeout) = config.default_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            runner: builder.build()?,
            registry: configured_registry(config)?,
        })
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.runner.project_path()
    }

    /// Registered checkers.
    #[must_use]
    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Registers an additional checker, replacing any with the same name.
    pub fn register<C: Checker + 'static>(&mut self, checker: C) {
        self.registry.register(checker);
    }

    /// Runs `names` in order and returns the report.
    pub fn run<S: AsRef<str>>(&self, names: &[S], observer: &mut dyn RunObserver) -> Report {
        let results = self.runner.run(&self.registry, names, observer);
        Report::new(self.root(), results)
    }

    /// Runs every checker whose tool is available.
    pub fn run_available(&self, observer: &mut dyn RunObserver) -> Report {
        let names: Vec<String> = self
            .registry
            .get_available_checkers()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect();
        self.run(&names, observer)
    }
}
