//! Writes checker configuration templates into a project.

use crate::checker::ConfigTemplate;
use crate::registry::CheckerRegistry;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors while writing configuration files.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Writing a file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// One file the generator produced or passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the project root.
    pub filename: String,
    /// Checkers that contributed content, in registry order. Empty for
    /// project files no checker adds to.
    pub contributors: Vec<String>,
}

/// Outcome of [`ConfigGenerator::generate`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Files written.
    pub written: Vec<GeneratedFile>,
    /// Files left alone because they already existed.
    pub skipped: Vec<GeneratedFile>,
}

/// Generates configuration files from every registered checker's templates.
///
/// Project files (packaging metadata such as a `pyproject.toml` skeleton)
/// are laid down first; checker templates sharing a file name are merged
/// after them, so the `[tool.*]` sections of several tools land in one
/// `pyproject.toml`. Existing files are never overwritten unless
/// [`force`](Self::force) is set.
#[derive(Debug)]
pub struct ConfigGenerator {
    project_path: PathBuf,
    project_files: Vec<ConfigTemplate>,
    force: bool,
}

impl ConfigGenerator {
    /// Creates a generator targeting `project_path`.
    #[must_use]
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            project_files: Vec::new(),
            force: false,
        }
    }

    /// Adds project files written ahead of any checker template.
    #[must_use]
    pub fn project_files(mut self, templates: impl IntoIterator<Item = ConfigTemplate>) -> Self {
        self.project_files.extend(templates);
        self
    }

    /// Overwrite files that already exist.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Directory files are written into.
    #[must_use]
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Writes every template file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be written. Files written before
    /// the failure are left in place.
    pub fn generate(&self, registry: &CheckerRegistry) -> Result<GenerateSummary, ScaffoldError> {
        let mut summary = GenerateSummary::default();

        for plan in plan_files(&self.project_files, registry) {
            let path = self.project_path.join(&plan.file.filename);

            if path.exists() && !self.force {
                warn!(
                    "{} already exists, skipping (use --force to overwrite)",
                    path.display()
                );
                summary.skipped.push(plan.file);
                continue;
            }

            std::fs::write(&path, plan.content).map_err(|source| ScaffoldError::Write {
                path: path.clone(),
                source,
            })?;
            info!("Generated {}", path.display());
            summary.written.push(plan.file);
        }

        Ok(summary)
    }
}

struct PlannedFile {
    file: GeneratedFile,
    content: String,
    sections: HashSet<String>,
}

impl PlannedFile {
    fn new(filename: &str) -> Self {
        Self {
            file: GeneratedFile {
                filename: filename.to_string(),
                contributors: Vec::new(),
            },
            content: String::new(),
            sections: HashSet::new(),
        }
    }

    /// Appends `section` unless an identical one is already present.
    fn push_section(&mut self, section: &str) {
        let section = section.trim_end();
        if section.is_empty() || !self.sections.insert(section.to_string()) {
            return;
        }
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(section);
        self.content.push('\n');
    }
}

/// Groups templates by file name in first-seen order, merging sections.
fn plan_files(project_files: &[ConfigTemplate], registry: &CheckerRegistry) -> Vec<PlannedFile> {
    let mut plans: Vec<PlannedFile> = Vec::new();

    for template in project_files {
        let slot = slot_for(&mut plans, &template.filename);
        plans[slot].push_section(&template.content);
    }

    for checker in registry.get_all_checkers() {
        let name = checker.name().to_string();
        for template in checker.config_files() {
            let slot = slot_for(&mut plans, &template.filename);
            let plan = &mut plans[slot];
            plan.push_section(&template.content);
            if !plan.file.contributors.contains(&name) {
                plan.file.contributors.push(name.clone());
            }
        }
    }

    plans
}

fn slot_for(plans: &mut Vec<PlannedFile>, filename: &str) -> usize {
    if let Some(slot) = plans.iter().position(|p| p.file.filename == filename) {
        return slot;
    }
    plans.push(PlannedFile::new(filename));
    plans.len() - 1
}
