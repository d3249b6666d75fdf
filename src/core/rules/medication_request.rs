//! MedicationRequest rules

use crate::core::models::record::{code_of, first_code};
use crate::core::models::{Profile, Record, ValidationReport, slot};

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    // Intent is a bare code in FHIR R4 but some feeds still send a concept.
    if let Some(intent) = record.get("intent").and_then(code_of)
        && !profile.permits(slot::INTENT, intent)
    {
        report.error(format!("MedicationRequest: Invalid intent code '{intent}'"));
    }

    if let Some(category) =
        record.get("category").and_then(super::single_or_first).and_then(first_code)
        && !profile.permits(slot::CATEGORY, category)
    {
        report.warning(format!("MedicationRequest: Unknown category code '{category}'"));
    }
}
