//! DiagnosticReport rules

use crate::core::models::record::first_code;
use crate::core::models::{Profile, Record, ValidationReport, slot};

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    super::check_status(record, profile, report);

    if let Some(category) =
        record.get("category").and_then(super::single_or_first).and_then(first_code)
        && !profile.permits(slot::CATEGORY, category)
    {
        report.warning(format!("DiagnosticReport: Unknown category code '{category}'"));
    }
}
