//! Locating `pycc.toml` for a project.
//!
//! A `--config` path always wins. Otherwise the project root is searched
//! for [`PROJECT_CONFIG_FILES`], and failing that the user directory
//! (`$PYCC_CONFIG_DIR`, else `~/.pycc`) for `config.toml`.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names looked up in the project root, first match wins.
pub const PROJECT_CONFIG_FILES: [&str; 2] = ["pycc.toml", ".pycc.toml"];

/// Environment variable overriding the user config directory.
pub const CONFIG_DIR_ENV: &str = "PYCC_CONFIG_DIR";

const USER_CONFIG_FILE: &str = "config.toml";

/// A config file that was found, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Named explicitly by the caller. Not checked for existence.
    Explicit(PathBuf),
    /// Inside the project root.
    Project(PathBuf),
    /// Inside the user config directory.
    User(PathBuf),
}

impl ConfigOrigin {
    /// The file's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::User(p) => p,
        }
    }

    /// Loads the file.
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        Config::from_file(self.path())
    }
}

/// The user config directory: `$PYCC_CONFIG_DIR`, else `~/.pycc`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".pycc")))
}

/// Finds the config file that applies to `project_dir`, if any.
#[must_use]
pub fn locate_config(project_dir: &Path, explicit: Option<&Path>) -> Option<ConfigOrigin> {
    locate_in(project_dir, explicit, user_config_dir().as_deref())
}

fn locate_in(
    project_dir: &Path,
    explicit: Option<&Path>,
    user_dir: Option<&Path>,
) -> Option<ConfigOrigin> {
    if let Some(path) = explicit {
        return Some(ConfigOrigin::Explicit(path.to_path_buf()));
    }

    let in_project = PROJECT_CONFIG_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| path.is_file())
        .map(ConfigOrigin::Project);

    let origin = in_project.or_else(|| {
        user_dir
            .map(|dir| dir.join(USER_CONFIG_FILE))
            .filter(|path| path.is_file())
            .map(ConfigOrigin::User)
    });

    if let Some(origin) = &origin {
        debug!("Config located: {}", origin.path().display());
    }
    origin
}

impl Config {
    /// Loads the config that applies to `project_dir`, or the defaults when
    /// no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a located file cannot be read or is invalid.
    pub fn discover(project_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        locate_config(project_dir, explicit).map_or_else(|| Ok(Self::default()), |o| o.load())
    }
}
