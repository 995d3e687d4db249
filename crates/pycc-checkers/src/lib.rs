//! # pycc-checkers
//!
//! The built-in Python tool checkers and the categories that group them.
//!
//! ## Available checkers
//!
//! | Category | Checkers |
//! |----------|----------|
//! | format | `black`, `isort` |
//! | lint | `flake8`, `pylint` |
//! | type | `mypy` |
//! | security | `bandit`, `safety` |
//! | docs | `pydocstyle` |
//! | complexity | `vulture`, `radon` |
//!
//! ## Usage
//!
//! ```ignore
//! use pycc_checkers::{checkers_for_categories, register_builtin_checkers, Category};
//! use pycc_core::CheckerRegistry;
//!
//! let mut registry = CheckerRegistry::new();
//! register_builtin_checkers(&mut registry);
//!
//! let names = checkers_for_categories(&[Category::Format, Category::Lint]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod categories;
mod templates;

pub use builtin::{
    builtin_checkers, configured_registry, project_templates, register_builtin_checkers,
};
pub use categories::{category_of, checkers_for_categories, Category, CATEGORIES};
