//! Generate-config command implementation.

use anyhow::{bail, Context, Result};
use pycc_checkers::project_templates;
use pycc_core::{CheckerRegistry, ConfigGenerator, GenerateSummary};
use std::io::{self, Write};
use std::path::Path;

/// Writes the project packaging files and every registered checker's
/// configuration templates into `project_path`.
pub fn run(registry: &CheckerRegistry, project_path: &Path, force: bool) -> Result<()> {
    if !project_path.is_dir() {
        bail!(
            "Project path '{}' is not a directory.",
            project_path.display()
        );
    }

    println!("Generating configuration files...");

    let summary = ConfigGenerator::new(project_path)
        .project_files(project_templates())
        .force(force)
        .generate(registry)
        .context("Failed to generate configuration files")?;

    write_report(&mut io::stdout().lock(), &summary)?;
    Ok(())
}

fn write_report<W: Write>(out: &mut W, summary: &GenerateSummary) -> io::Result<()> {
    for file in &summary.written {
        if file.contributors.is_empty() {
            writeln!(out, "  Created {}", file.filename)?;
        } else {
            writeln!(out, "  Created {} ({})", file.filename, file.contributors.join(", "))?;
        }
    }
    for file in &summary.skipped {
        writeln!(
            out,
            "  Skipped {} (already exists, use --force to overwrite)",
            file.filename
        )?;
    }

    if summary.written.is_empty() {
        writeln!(out, "No configuration files written.")
    } else {
        writeln!(out, "Configuration files generated successfully!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pycc_core::GeneratedFile;

    fn file(name: &str, contributors: &[&str]) -> GeneratedFile {
        GeneratedFile {
            filename: name.to_string(),
            contributors: contributors.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn report_lists_written_and_skipped() {
        let summary = GenerateSummary {
            written: vec![
                file("pyproject.toml", &["black", "isort"]),
                file("Pipfile", &[]),
            ],
            skipped: vec![file(".flake8", &["flake8"])],
        };
        let mut out = Vec::new();
        write_report(&mut out, &summary).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Created pyproject.toml (black, isort)\n\
             \x20 Created Pipfile\n\
             \x20 Skipped .flake8 (already exists, use --force to overwrite)\n\
             Configuration files generated successfully!\n"
        );
    }

    #[test]
    fn nothing_written() {
        let summary = GenerateSummary {
            written: Vec::new(),
            skipped: vec![file(".bandit", &["bandit"])],
        };
        let mut out = Vec::new();
        write_report(&mut out, &summary).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("No configuration files written.\n"));
    }
}
