//! Practitioner rules
//!
//! The BMDC registration number sits one level down, in an inner extension
//! of the `bmdc-registration` extension. A missing extension, a missing
//! number and a malformed number are reported separately.

use serde_json::Value;

use crate::core::models::record::{extension_url, extensions_of};
use crate::core::models::{Profile, Record, ValidationReport};
use crate::core::patterns;
use crate::core::registry::BMDC_EXTENSION;
use crate::core::services::matcher::find_extension;

/// Key of the inner extension carrying the registration number
const BMDC_NUMBER_KEY: &str = "bmdcNumber";

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    let Some(registration) = find_extension(record.extensions(), BMDC_EXTENSION) else {
        super::missing_extension(profile, BMDC_EXTENSION, report);
        return;
    };

    // Inner keys are fixed names, not versioned URLs: exact match.
    let number = extensions_of(registration)
        .iter()
        .find(|ext| extension_url(ext) == BMDC_NUMBER_KEY)
        .and_then(|ext| ext.get("valueString"))
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty());

    let Some(number) = number else {
        report.error("Practitioner: Missing BMDC number in extension");
        return;
    };

    if !patterns::is_bmdc_number(number) {
        report.error(format!("Practitioner: Invalid BMDC number format '{number}'"));
    }
}
