//! Output formatting for human and JSON modes
//!
//! This module renders validation reports and batch summaries either as
//! human-readable text or machine-parseable JSON. Rendering is purely
//! presentational: it reads reports, it never changes them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::batch::{BatchSummary, FileStatus};
use crate::core::models::ValidationReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Line printed for a report without findings
pub const PASSED_LINE: &str = "Validation passed successfully!";

/// Result of validating a single file
#[derive(Debug, Serialize)]
pub struct FileResult {
    /// The validated file
    pub file: PathBuf,
    /// Whether the record passed
    pub passed: bool,
    /// The record's findings
    #[serde(flatten)]
    pub report: ValidationReport,
}

impl FileResult {
    /// Wrap a report for rendering
    #[must_use]
    pub fn new(file: &Path, report: ValidationReport) -> Self {
        Self {
            file: file.to_path_buf(),
            passed: report.passed(),
            report,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", paint_report(&self.report)),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A single file that could not be read or parsed
#[derive(Debug, Serialize)]
pub struct UnreadableFile {
    /// The file that was requested
    pub file: PathBuf,
    /// Always `false`
    pub passed: bool,
    /// Why the file could not be validated
    pub error: String,
}

impl UnreadableFile {
    /// Describe a file that failed to load
    #[must_use]
    pub fn new(file: &Path, error: impl ToString) -> Self {
        Self {
            file: file.to_path_buf(),
            passed: false,
            error: error.to_string(),
        }
    }

    /// Render based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Could not validate {}:", self.file.display().to_string().bold());
                println!("  - {}", self.error);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl BatchSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for outcome in self.failures() {
            let name = outcome.display_path(&self.root);
            match &outcome.status {
                FileStatus::Failed { report } => {
                    println!("\nValidation errors in {}:", name.bold());
                    print!("{}", paint_report(report));
                },
                FileStatus::Unreadable { reason } => {
                    println!("\nCould not validate {}:", name.bold());
                    println!("  - {reason}");
                },
                FileStatus::Passed { .. } => continue,
            }
            println!("{}", "-".repeat(50));
        }

        print!("{}", format_summary(self));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Render a report as plain text
///
/// An `ERRORS:` block, then a `WARNINGS:` block, each omitted when empty.
/// A report with neither gets a single pass line.
#[must_use]
pub fn format_report(report: &ValidationReport) -> String {
    write_report(report, false)
}

/// Render batch counts as plain text
#[must_use]
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  Total files: {}", summary.total);
    let _ = writeln!(out, "  Passed: {}", summary.passed);
    let _ = writeln!(out, "  Failed: {}", summary.failed);
    let _ = writeln!(out, "  Success rate: {}", format_rate(summary.success_rate));
    out
}

/// Format a success rate with one decimal, or `n/a` for an empty batch
#[must_use]
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| format!("{r:.1}%"))
}

fn paint_report(report: &ValidationReport) -> String {
    write_report(report, true)
}

fn write_report(report: &ValidationReport, paint: bool) -> String {
    let mut out = String::new();

    if !report.errors.is_empty() {
        let heading = if paint { "ERRORS:".red().bold().to_string() } else { "ERRORS:".to_string() };
        let _ = writeln!(out, "{heading}");
        for message in report.error_messages() {
            let _ = writeln!(out, "  - {message}");
        }
    }

    if !report.warnings.is_empty() {
        let heading =
            if paint { "WARNINGS:".yellow().bold().to_string() } else { "WARNINGS:".to_string() };
        let _ = writeln!(out, "{heading}");
        for message in report.warning_messages() {
            let _ = writeln!(out, "  - {message}");
        }
    }

    if report.is_clean() {
        let line = if paint { PASSED_LINE.green().to_string() } else { PASSED_LINE.to_string() };
        let _ = writeln!(out, "{line}");
    }

    out
}
