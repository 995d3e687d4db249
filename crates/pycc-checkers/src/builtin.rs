//! The built-in checker table and registry bootstrap.

use crate::templates;
use pycc_core::{Checker, CheckerRegistry, CommandChecker, Config, ConfigError, ConfigTemplate};
use tracing::debug;

/// Returns the built-in checkers, in listing order.
///
/// | Name | Tool | Category |
/// |------|------|----------|
/// | `black` | formatter | format |
/// | `isort` | import sorter | format |
/// | `flake8` | linter | lint |
/// | `pylint` | linter | lint |
/// | `mypy` | type checker | type |
/// | `bandit` | security linter | security |
/// | `safety` | vulnerability scanner | security |
/// | `pydocstyle` | docstring checker | docs |
/// | `vulture` | dead code finder | complexity |
/// | `radon` | complexity metrics | complexity |
#[must_use]
pub fn builtin_checkers() -> Vec<CommandChecker> {
    vec![
        CommandChecker::new("black", "black")
            .args(["--check", "."])
            .with_description("Code formatting with Black")
            .config_file(ConfigTemplate::new(
                "pyproject.toml",
                templates::BLACK_PYPROJECT,
                "Black configuration in pyproject.toml",
            )),
        CommandChecker::new("isort", "isort")
            .args(["--check-only", "."])
            .with_description("Import sorting with isort")
            .config_file(ConfigTemplate::new(
                "pyproject.toml",
                templates::ISORT_PYPROJECT,
                "isort configuration in pyproject.toml",
            )),
        CommandChecker::new("flake8", "flake8")
            .args(["."])
            .with_description("Linting with Flake8")
            .config_file(ConfigTemplate::new(
                ".flake8",
                templates::FLAKE8,
                "Flake8 configuration file",
            )),
        CommandChecker::new("pylint", "pylint")
            .args(["."])
            .with_description("Linting with Pylint")
            .config_file(ConfigTemplate::new(
                "pyproject.toml",
                templates::PYLINT_PYPROJECT,
                "Pylint configuration in pyproject.toml",
            )),
        CommandChecker::new("mypy", "mypy")
            .args(["."])
            .with_description("Type checking with MyPy")
            .config_file(ConfigTemplate::new(
                "pyproject.toml",
                templates::MYPY_PYPROJECT,
                "MyPy configuration in pyproject.toml",
            )),
        CommandChecker::new("bandit", "bandit")
            .args(["-r", "."])
            .with_description("Security linting with Bandit")
            .config_file(ConfigTemplate::new(
                ".bandit",
                templates::BANDIT,
                "Bandit configuration file",
            )),
        CommandChecker::new("safety", "safety")
            .args(["check"])
            .with_description("Security vulnerability checking with Safety"),
        CommandChecker::new("pydocstyle", "pydocstyle")
            .args(["."])
            .with_description("Documentation style checking with Pydocstyle")
            .config_file(ConfigTemplate::new(
                "pyproject.toml",
                templates::PYDOCSTYLE_PYPROJECT,
                "Pydocstyle configuration in pyproject.toml",
            )),
        CommandChecker::new("vulture", "vulture")
            .args([".", "--min-confidence=80"])
            .with_description("Dead code detection with Vulture"),
        CommandChecker::new("radon", "radon")
            .args(["cc", ".", "--min=A"])
            .with_description("Cyclomatic complexity with Radon"),
    ]
}

/// Registers every built-in checker.
///
/// Calling this more than once re-registers the same names with identical
/// checkers, leaving the registry unchanged in content.
pub fn register_builtin_checkers(registry: &mut CheckerRegistry) {
    for checker in builtin_checkers() {
        registry.register(checker);
    }
}

/// Project packaging files written by `--generate-config` ahead of the
/// checkers' own templates.
///
/// The `pyproject.toml` skeleton carries build metadata and the dev
/// dependencies; the built-in `[tool.*]` sections are merged after it.
#[must_use]
pub fn project_templates() -> Vec<ConfigTemplate> {
    vec![
        ConfigTemplate::new(
            "pyproject.toml",
            templates::PROJECT_PYPROJECT,
            "Build system, project metadata, pytest and coverage settings",
        ),
        ConfigTemplate::new(
            "setup.cfg",
            templates::SETUP_CFG,
            "setuptools metadata and coverage settings",
        ),
        ConfigTemplate::new(
            "Pipfile",
            templates::PIPFILE,
            "Pipenv file with the checkers as dev dependencies",
        ),
    ]
}

/// Builds the registry for a run: built-ins adjusted by `config`, followed
/// by the custom checkers `config` declares.
///
/// Built-ins disabled in `config` are not registered. A custom checker
/// reusing a built-in name replaces that built-in.
///
/// # Errors
///
/// Returns an error if a `[checkers.NAME]` entry names neither a built-in
/// nor a custom checker.
pub fn configured_registry(config: &Config) -> Result<CheckerRegistry, ConfigError> {
    let builtins = builtin_checkers();

    for name in config.checkers.keys() {
        let known = builtins.iter().any(|c| c.name() == name.as_str())
            || config.custom.iter().any(|c| &c.name == name);
        if !known {
            return Err(ConfigError::Invalid {
                message: format!("[checkers.{name}] does not match any checker"),
            });
        }
    }

    let mut registry = CheckerRegistry::new();

    for checker in builtins {
        let name = checker.name().to_string();
        if !config.is_checker_enabled(&name) {
            debug!("Checker disabled by config: {}", name);
            continue;
        }
        match config.checker(&name) {
            Some(overrides) => registry.register(overrides.apply(checker)),
            None => registry.register(checker),
        }
    }

    for custom in &config.custom {
        if !config.is_checker_enabled(&custom.name) {
            debug!("Checker disabled by config: {}", custom.name);
            continue;
        }
        let checker = custom.to_checker();
        match config.checker(&custom.name) {
            Some(overrides) => registry.register(overrides.apply(checker)),
            None => registry.register(checker),
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CATEGORIES;

    fn snapshot(registry: &CheckerRegistry) -> Vec<(String, String)> {
        registry
            .get_all_checkers()
            .iter()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect()
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let mut registry = CheckerRegistry::new();
        register_builtin_checkers(&mut registry);
        let first = snapshot(&registry);

        register_builtin_checkers(&mut registry);
        assert_eq!(snapshot(&registry), first);
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn every_categorized_name_is_builtin() {
        let mut registry = CheckerRegistry::new();
        register_builtin_checkers(&mut registry);
        for (_, names) in CATEGORIES {
            for name in *names {
                assert!(registry.contains(name), "{name} is not registered");
            }
        }
    }

    #[test]
    fn builtin_listing_order() {
        let names: Vec<String> = builtin_checkers()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        insta::assert_snapshot!(names.join(","), @"black,isort,flake8,pylint,mypy,bandit,safety,pydocstyle,vulture,radon");
    }

    #[test]
    fn pyproject_sections_are_shared() {
        let contributors: Vec<String> = builtin_checkers()
            .iter()
            .filter(|c| {
                c.config_files()
                    .iter()
                    .any(|t| t.filename == "pyproject.toml")
            })
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(
            contributors,
            vec!["black", "isort", "pylint", "mypy", "pydocstyle"]
        );
    }

    #[test]
    fn config_disables_and_overrides() {
        let config = Config::parse(
            r#"
[checkers.pylint]
enabled = false

[checkers.black]
args = ["--check", "--diff", "."]

[[custom]]
name = "ruff"
command = "ruff"
args = ["check", "."]
description = "Linting with Ruff"
"#,
        )
        .unwrap();

        let registry = configured_registry(&config).unwrap();
        assert!(!registry.contains("pylint"));
        assert!(registry.contains("ruff"));
        assert_eq!(registry.names().last(), Some(&"ruff"));
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn custom_checker_replaces_builtin() {
        let config = Config::parse(
            r#"
[[custom]]
name = "mypy"
command = "pyright"
description = "Type checking with Pyright"
"#,
        )
        .unwrap();

        let registry = configured_registry(&config).unwrap();
        assert_eq!(registry.len(), 10);
        assert_eq!(
            registry.get_checker("mypy").map(|c| c.description()),
            Some("Type checking with Pyright")
        );
    }

    #[test]
    fn unknown_override_is_rejected() {
        let config = Config::parse("[checkers.pylnt]\nenabled = false\n").unwrap();
        let err = configured_registry(&config).unwrap_err();
        assert!(err.to_string().contains("pylnt"));
    }
}
