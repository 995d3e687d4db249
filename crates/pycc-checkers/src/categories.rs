//! Named groupings of checkers.
//!
//! [`CATEGORIES`] is the one table mapping categories to checker names;
//! selection and listing both read it.

/// A named group of checkers selectable as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Code formatting.
    Format,
    /// Linting.
    Lint,
    /// Static type checking.
    Type,
    /// Security scanning.
    Security,
    /// Documentation style.
    Docs,
    /// Dead code and complexity.
    Complexity,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Self; 6] = [
        Self::Format,
        Self::Lint,
        Self::Type,
        Self::Security,
        Self::Docs,
        Self::Complexity,
    ];

    /// Lowercase name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Lint => "lint",
            Self::Type => "type",
            Self::Security => "security",
            Self::Docs => "docs",
            Self::Complexity => "complexity",
        }
    }

    /// Checker names in this category.
    #[must_use]
    pub fn checkers(self) -> &'static [&'static str] {
        CATEGORIES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, names)| *names)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Category → checker names.
pub const CATEGORIES: &[(Category, &[&str])] = &[
    (Category::Format, &["black", "isort"]),
    (Category::Lint, &["flake8", "pylint"]),
    (Category::Type, &["mypy"]),
    (Category::Security, &["bandit", "safety"]),
    (Category::Docs, &["pydocstyle"]),
    (Category::Complexity, &["vulture", "radon"]),
];

/// Resolves the union of several categories to checker names.
///
/// The result follows table order and contains no duplicates, regardless
/// of how `selected` is ordered or repeated.
#[must_use]
pub fn checkers_for_categories(selected: &[Category]) -> Vec<&'static str> {
    let mut names = Vec::new();
    for (category, members) in CATEGORIES {
        if !selected.contains(category) {
            continue;
        }
        for name in *members {
            if !names.contains(name) {
                names.push(*name);
            }
        }
    }
    names
}

/// Finds the category a checker belongs to, if any.
#[must_use]
pub fn category_of(name: &str) -> Option<Category> {
    CATEGORIES
        .iter()
        .find(|(_, members)| members.contains(&name))
        .map(|(category, _)| *category)
}
