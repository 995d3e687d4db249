//! List command implementation.

use anyhow::Result;
use owo_colors::Style;
use pycc_checkers::{category_of, CATEGORIES};
use pycc_core::CheckerRegistry;
use std::collections::HashSet;
use std::io::{self, Write};

use super::output::{paint, write_header};

/// One row of the listing.
#[derive(Debug, Clone, Copy)]
pub struct ListEntry<'a> {
    /// Checker name.
    pub name: &'a str,
    /// Checker description.
    pub description: &'a str,
    /// Whether the availability probe succeeded.
    pub available: bool,
}

/// Runs the list command, probing every registered checker once.
pub fn run(registry: &CheckerRegistry, color: bool) -> Result<()> {
    let available: HashSet<&str> = registry
        .get_available_checkers()
        .into_iter()
        .map(|c| c.name())
        .collect();

    let entries: Vec<ListEntry<'_>> = registry
        .get_all_checkers()
        .into_iter()
        .map(|c| ListEntry {
            name: c.name(),
            description: c.description(),
            available: available.contains(c.name()),
        })
        .collect();

    write_listing(&mut io::stdout().lock(), &entries, color)?;
    Ok(())
}

/// Writes checkers grouped by category, then uncategorized ones, then totals.
pub fn write_listing<W: Write>(out: &mut W, entries: &[ListEntry<'_>], color: bool) -> io::Result<()> {
    write_header(out, "Available Checkers", color)?;

    for (category, names) in CATEGORIES {
        writeln!(out)?;
        writeln!(out, "{} CHECKS:", category.name().to_uppercase())?;
        for name in *names {
            if let Some(entry) = entries.iter().find(|e| e.name == *name) {
                write_entry(out, entry, color)?;
            }
        }
    }

    let custom: Vec<&ListEntry<'_>> = entries
        .iter()
        .filter(|e| category_of(e.name).is_none())
        .collect();
    if !custom.is_empty() {
        writeln!(out)?;
        writeln!(out, "CUSTOM CHECKS:")?;
        for entry in custom {
            write_entry(out, entry, color)?;
        }
    }

    let available = entries.iter().filter(|e| e.available).count();
    writeln!(out)?;
    writeln!(out, "Total: {available}/{} checkers available", entries.len())
}

fn write_entry<W: Write>(out: &mut W, entry: &ListEntry<'_>, color: bool) -> io::Result<()> {
    let mark = if entry.available {
        paint("✓", Style::new().green(), color)
    } else {
        paint("✗", Style::new().red(), color)
    };
    writeln!(out, "  {mark} {}: {}", entry.name, entry.description)
}
