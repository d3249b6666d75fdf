//! Procedure rules

use crate::core::models::record::first_system;
use crate::core::models::{Profile, Record, ValidationReport, slot};

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    super::check_status(record, profile, report);

    if let Some(system) = record.get("code").and_then(first_system)
        && !profile.permits(slot::CODE_SYSTEM, system)
    {
        report.warning(format!("Procedure: Unknown code system '{system}'"));
    }
}
