//! Shared text rendering for check progress and summaries.

use owo_colors::{OwoColorize, Style};
use pycc_core::{CheckResult, CheckStatus, RunObserver, Summary};
use std::io::{self, Write};

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow().bold()
}

/// Applies `style` when `color` is set.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Writes a section header surrounded by blank lines.
pub fn write_header<W: Write>(out: &mut W, title: &str, color: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", paint(&format!("=== {title} ==="), yellow(), color))?;
    writeln!(out)
}

/// Writes the one- or two-line rendering of a finished check.
///
/// Captured stderr of a failed check is only shown when `verbose` is set;
/// the message of an errored check is always shown.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &CheckResult,
    verbose: bool,
    color: bool,
) -> io::Result<()> {
    let name = result.name();
    let secs = result.duration();
    let detail = result.error_text().trim_end();

    match result.status() {
        CheckStatus::Passed => {
            writeln!(out, "{}", paint(&format!("✓ {name} passed ({secs:.2}s)"), green(), color))
        }
        CheckStatus::Failed => {
            writeln!(out, "{}", paint(&format!("✗ {name} failed ({secs:.2}s)"), red(), color))?;
            if verbose && !detail.is_empty() {
                writeln!(out, "  {}", paint(&format!("Error: {detail}"), red(), color))?;
            }
            Ok(())
        }
        CheckStatus::Error => {
            writeln!(out, "{}", paint(&format!("✗ {name} error ({secs:.2}s)"), red(), color))?;
            if !detail.is_empty() {
                writeln!(out, "  {}", paint(&format!("Error: {detail}"), red(), color))?;
            }
            Ok(())
        }
        CheckStatus::Skipped => {
            writeln!(out, "{}", paint(&format!("- {name} skipped"), yellow(), color))?;
            if !detail.is_empty() {
                writeln!(out, "  {}", paint(&format!("Reason: {detail}"), yellow(), color))?;
            }
            Ok(())
        }
    }
}

/// Writes the totals block that closes a text-mode run.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary, color: bool) -> io::Result<()> {
    write_header(out, "Summary", color)?;

    writeln!(out, "Total checks: {}", summary.total)?;
    writeln!(out, "{}", paint(&format!("Passed: {}", summary.passed), green(), color))?;
    writeln!(out, "{}", paint(&format!("Failed: {}", summary.failed), red(), color))?;
    writeln!(out, "{}", paint(&format!("Errors: {}", summary.error), red(), color))?;
    writeln!(out, "{}", paint(&format!("Skipped: {}", summary.skipped), yellow(), color))?;
    writeln!(out)?;

    if summary.is_success() {
        writeln!(out, "{}", paint("All checks passed!", green(), color))
    } else {
        writeln!(
            out,
            "{}",
            paint(&format!("{} check(s) failed", summary.failures()), red(), color)
        )
    }
}

/// Streams run progress as text.
pub struct ProgressPrinter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
}

impl<W: Write> ProgressPrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunObserver for ProgressPrinter<W> {
    fn on_start(&mut self, name: &str) {
        writeln!(self.out).ok();
        writeln!(self.out, "=== Running {name} ===").ok();
    }

    fn on_result(&mut self, result: &CheckResult) {
        write_result(&mut self.out, result, self.verbose, self.color).ok();
        self.out.flush().ok();
    }

    fn on_warning(&mut self, message: &str) {
        writeln!(
            self.out,
            "{}",
            paint(&format!("Warning: {message}"), yellow(), self.color)
        )
        .ok();
    }
}

/// Reports warnings on stderr and nothing else; keeps stdout free for JSON.
pub struct WarningPrinter;

impl RunObserver for WarningPrinter {
    fn on_warning(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }
}
