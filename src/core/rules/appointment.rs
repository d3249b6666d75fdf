//! Appointment rules

use serde_json::Value;

use crate::core::models::{Profile, Record, ValidationReport};

const ACCEPTED: &str = "accepted";

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    super::check_status(record, profile, report);

    // An absent participant field is already a missing required field.
    let Some(participants) = record.get("participant") else {
        return;
    };

    let participants = participants.as_array().map(Vec::as_slice).unwrap_or_default();
    if participants.is_empty() {
        report.error("Appointment: Missing participants");
        return;
    }

    let any_accepted = participants
        .iter()
        .any(|p| p.get("status").and_then(Value::as_str) == Some(ACCEPTED));
    if !any_accepted {
        report.warning("Appointment: No accepted participants found");
    }
}
