//! Kind-specific rule sets
//!
//! Each record kind with invariants beyond its profile's structural
//! requirements gets one rule set. Rule sets only append findings; they never
//! remove or reorder what the engine's structural checks already reported.
//!
//! When a coded value cannot be extracted (field absent, empty coding list)
//! the membership check is skipped. Absence is the structural checks' job.

mod appointment;
mod diagnostic_report;
mod encounter;
mod medication_request;
mod observation;
mod patient;
mod practitioner;
mod procedure;

use serde_json::Value;

use crate::core::models::{Profile, Record, ValidationReport, slot};

/// The closed set of kind-specific rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Nationality-dependent identifier and address rules
    Patient,
    /// BMDC registration rules
    Practitioner,
    /// Service classification rules
    Encounter,
    /// Coding system and value structure rules
    Observation,
    /// Intent and category rules
    MedicationRequest,
    /// Status and coding system rules
    Procedure,
    /// Status and participant rules
    Appointment,
    /// Status and category rules
    DiagnosticReport,
}

impl RuleSet {
    /// Every rule set
    pub const ALL: [Self; 8] = [
        Self::Patient,
        Self::Practitioner,
        Self::Encounter,
        Self::Observation,
        Self::MedicationRequest,
        Self::Procedure,
        Self::Appointment,
        Self::DiagnosticReport,
    ];

    /// Look up the rule set for a kind name
    #[must_use]
    pub fn for_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rs| rs.kind() == kind)
    }

    /// The kind name this rule set applies to
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Practitioner => "Practitioner",
            Self::Encounter => "Encounter",
            Self::Observation => "Observation",
            Self::MedicationRequest => "MedicationRequest",
            Self::Procedure => "Procedure",
            Self::Appointment => "Appointment",
            Self::DiagnosticReport => "DiagnosticReport",
        }
    }

    /// Apply this rule set's checks, appending findings to `report`
    pub fn apply(self, record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
        match self {
            Self::Patient => patient::apply(record, profile, report),
            Self::Practitioner => practitioner::apply(record, profile, report),
            Self::Encounter => encounter::apply(record, profile, report),
            Self::Observation => observation::apply(record, profile, report),
            Self::MedicationRequest => medication_request::apply(record, profile, report),
            Self::Procedure => procedure::apply(record, profile, report),
            Self::Appointment => appointment::apply(record, profile, report),
            Self::DiagnosticReport => diagnostic_report::apply(record, profile, report),
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// Render a coded value for a message: strings bare, anything else as JSON
fn display_code(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), ToString::to_string)
}

/// A field that may hold one CodeableValue or a list of them
fn single_or_first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(value),
        _ => None,
    }
}

/// Check a top-level `status` against the profile's permitted statuses
///
/// An absent status is left to the required-field check. A present status
/// that is not a permitted code string is an error.
fn check_status(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    let Some(status) = record.get("status") else {
        return;
    };

    let permitted = status.as_str().is_some_and(|s| profile.permits(slot::STATUS, s));
    if !permitted {
        report.error(format!("{}: Invalid status '{}'", profile.kind(), display_code(status)));
    }
}

/// Report a rule set's own missing-extension error, unless the profile
/// already requires that extension and the engine has reported it
fn missing_extension(profile: &Profile, fragment: &str, report: &mut ValidationReport) {
    if !profile.requires_extension(fragment) {
        report.error(format!("{}: Missing {fragment} extension", profile.kind()));
    }
}
