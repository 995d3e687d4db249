//! Catalog of known checkers.

use crate::checker::{Checker, CheckerBox};
use std::collections::HashMap;
use tracing::debug;

/// Owns every [`Checker`] known to the process, keyed by name.
///
/// Registration order is preserved for listing. Registering a name that
/// already exists replaces the checker in place, which is how built-ins are
/// overridden by custom checkers. Entries are never removed.
#[derive(Default)]
pub struct CheckerRegistry {
    checkers: Vec<CheckerBox>,
    index: HashMap<String, usize>,
}

impl CheckerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `checker`, replacing any previous checker with the same name.
    pub fn register<C: Checker + 'static>(&mut self, checker: C) {
        self.register_box(Box::new(checker));
    }

    /// Inserts a boxed checker, replacing any previous one with the same name.
    pub fn register_box(&mut self, checker: CheckerBox) {
        let name = checker.name().to_string();
        if let Some(&slot) = self.index.get(&name) {
            debug!("Replacing checker: {}", name);
            self.checkers[slot] = checker;
        } else {
            debug!("Registering checker: {}", name);
            self.index.insert(name, self.checkers.len());
            self.checkers.push(checker);
        }
    }

    /// Looks up a checker by name.
    #[must_use]
    pub fn get_checker(&self, name: &str) -> Option<&dyn Checker> {
        self.index.get(name).map(|&slot| self.checkers[slot].as_ref())
    }

    /// Returns true if a checker with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All registered checkers, in registration order.
    ///
    /// The snapshot borrows the registry immutably, so it cannot be used to
    /// modify registry state.
    #[must_use]
    pub fn get_all_checkers(&self) -> Vec<&dyn Checker> {
        self.checkers.iter().map(|c| &**c).collect()
    }

    /// Registered checkers whose availability probe succeeds.
    ///
    /// Probes every checker on each call.
    #[must_use]
    pub fn get_available_checkers(&self) -> Vec<&dyn Checker> {
        self.checkers
            .iter()
            .map(|c| &**c)
            .filter(|c| c.is_available())
            .collect()
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    /// Number of registered checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl std::fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerRegistry")
            .field("checkers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckContext;
    use crate::types::CheckResult;
    use std::time::Duration;

    struct Fake {
        name: &'static str,
        description: &'static str,
        available: bool,
    }

    impl Checker for Fake {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            self.description
        }
        fn is_available(&self) -> bool {
            self.available
        }
        fn check(&self, _ctx: &CheckContext<'_>) -> CheckResult {
            CheckResult::passed(self.name, "", Duration::ZERO)
        }
    }

    fn fake(name: &'static str, available: bool) -> Fake {
        Fake {
            name,
            description: "",
            available,
        }
    }

    #[test]
    fn get_checker_returns_registered_name() {
        let mut registry = CheckerRegistry::new();
        for name in ["black", "isort", "mypy"] {
            registry.register(fake(name, true));
        }
        for name in ["black", "isort", "mypy"] {
            assert_eq!(registry.get_checker(name).map(Checker::name), Some(name));
        }
        assert!(registry.get_checker("pylint").is_none());
    }

    #[test]
    fn last_registration_wins_and_keeps_slot() {
        let mut registry = CheckerRegistry::new();
        registry.register(fake("a", true));
        registry.register(fake("b", true));
        registry.register(Fake {
            name: "a",
            description: "override",
            available: false,
        });

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(
            registry.get_checker("a").map(Checker::description),
            Some("override")
        );
    }

    #[test]
    fn available_is_subset_of_all() {
        let mut registry = CheckerRegistry::new();
        registry.register(fake("fmt", true));
        registry.register(fake("lint", false));
        registry.register(fake("types", true));

        let all: Vec<&str> = registry.get_all_checkers().iter().map(|c| c.name()).collect();
        let available: Vec<&str> = registry
            .get_available_checkers()
            .iter()
            .map(|c| c.name())
            .collect();

        assert_eq!(all, vec!["fmt", "lint", "types"]);
        assert_eq!(available, vec!["fmt", "types"]);
        assert!(available.iter().all(|name| all.contains(name)));
    }

    #[test]
    fn empty_registry() {
        let registry = CheckerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get_all_checkers().is_empty());
        assert!(!registry.contains("anything"));
    }
}
