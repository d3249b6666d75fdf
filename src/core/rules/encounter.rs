//! Encounter rules

use crate::core::models::record::first_code;
use crate::core::models::{Profile, Record, ValidationReport, slot};
use crate::core::registry::SERVICE_TYPE_EXTENSION;
use crate::core::services::matcher::find_extension;

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    let Some(service_type) = find_extension(record.extensions(), SERVICE_TYPE_EXTENSION) else {
        super::missing_extension(profile, SERVICE_TYPE_EXTENSION, report);
        return;
    };

    let Some(code) = service_type.get("valueCodeableConcept").and_then(first_code) else {
        return;
    };

    if !profile.permits(slot::SERVICE_TYPE, code) {
        report.error(format!("Encounter: Invalid service type '{code}'"));
    }
}
