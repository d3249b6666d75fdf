//! Observation rules
//!
//! Unknown coding systems only warn, so new terminologies can be adopted
//! without failing existing data. A malformed value is an error.

use serde_json::Value;

use crate::core::models::record::first_system;
use crate::core::models::{Profile, Record, ValidationReport, slot};

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    if let Some(system) = record.get("code").and_then(first_system)
        && !profile.permits(slot::CODE_SYSTEM, system)
    {
        report.warning(format!("Observation: Unknown code system '{system}'"));
    }

    if let Some(quantity) = record.get("valueQuantity") {
        if !is_valid_quantity(quantity) {
            report.error("Observation: Invalid valueQuantity structure");
        }
    } else if let Some(concept) = record.get("valueCodeableConcept")
        && concept.get("coding").is_none()
    {
        report.error("Observation: Invalid valueCodeableConcept structure");
    }
}

/// A quantity needs a numeric magnitude and a unit
fn is_valid_quantity(quantity: &Value) -> bool {
    quantity.get("value").is_some_and(Value::is_number)
        && quantity.get("unit").is_some_and(Value::is_string)
}
