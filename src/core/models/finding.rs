//! Findings and per-record validation reports

use serde::{Deserialize, Serialize};

use super::Severity;

/// One reported problem from a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Whether this finding fails the record
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Create an error finding
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning finding
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Findings accumulated by a single validation pass
///
/// A report is created fresh for every record, so findings from one record
/// can never show up in another record's report. Errors and warnings keep the
/// order in which the checks raised them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Kind of the validated record, if it declared one
    pub kind: Option<String>,
    /// Fatal findings, in the order they were raised
    pub errors: Vec<Finding>,
    /// Advisory findings, in the order they were raised
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    /// Start an empty report for a record of the given kind
    #[must_use]
    pub fn for_kind(kind: Option<&str>) -> Self {
        Self {
            kind: kind.map(String::from),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether the record passed (no errors; warnings never fail a record)
    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the pass produced no findings at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Record a finding in the list matching its severity
    pub fn push(&mut self, finding: Finding) {
        if finding.severity.is_fatal() {
            self.errors.push(finding);
        } else {
            self.warnings.push(finding);
        }
    }

    /// Record an error
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Finding::error(message));
    }

    /// Record a warning
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Finding::warning(message));
    }

    /// Error messages, in order
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|f| f.message.as_str())
    }

    /// Warning messages, in order
    pub fn warning_messages(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|f| f.message.as_str())
    }
}
