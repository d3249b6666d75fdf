//! Patient rules
//!
//! The nationality class decides which identifier formats and which address
//! extensions apply. Identifiers and address details are advisory: their
//! absence is a warning, a malformed value is an error.

use serde_json::Value;

use crate::core::models::record::{extension_url, extensions_of, first_code, first_coding};
use crate::core::models::{Profile, Record, ValidationReport, slot};
use crate::core::patterns;
use crate::core::registry::{NATIONALITY_BANGLADESHI, NATIONALITY_EXTENSION, NATIONALITY_ROHINGYA};
use crate::core::services::matcher::{find_extension, matches_fragment};

const ADMIN_BOUNDARY_EXTENSION: &str = "administrative-boundaries";
const CAMP_EXTENSION: &str = "camp-information";

pub(super) fn apply(record: Record<'_>, profile: &Profile, report: &mut ValidationReport) {
    let Some(nationality) = find_extension(record.extensions(), NATIONALITY_EXTENSION) else {
        super::missing_extension(profile, NATIONALITY_EXTENSION, report);
        return;
    };

    let Some(coding) = nationality.get("valueCodeableConcept").and_then(first_coding) else {
        report.error("Patient: Invalid nationality extension format");
        return;
    };

    let code = coding.get("code").and_then(Value::as_str).unwrap_or_default();
    if !profile.permits(slot::NATIONALITY, code) {
        report.error(format!("Patient: Invalid nationality code '{code}'"));
        return;
    }

    let identifiers = record.array("identifier");
    let address = record.array("address").first();

    match code {
        NATIONALITY_BANGLADESHI => {
            check_bangladeshi_identifiers(identifiers, report);
            if let Some(address) = address {
                check_bangladeshi_address(address, report);
            }
        },
        NATIONALITY_ROHINGYA => {
            check_rohingya_identifiers(identifiers, report);
            if let Some(address) = address {
                check_rohingya_address(address, report);
            }
        },
        _ => {},
    }
}

/// Identifier type code and value
fn identifier_parts(identifier: &Value) -> (Option<&str>, &str) {
    let code = identifier.get("type").and_then(first_code);
    let value = identifier.get("value").and_then(Value::as_str).unwrap_or_default();
    (code, value)
}

fn check_bangladeshi_identifiers(identifiers: &[Value], report: &mut ValidationReport) {
    let mut has_nid = false;

    for identifier in identifiers {
        if let (Some("NID"), value) = identifier_parts(identifier) {
            if !patterns::is_national_id(value) {
                report.error(format!("Patient: Invalid NID format '{value}' (must be 13 digits)"));
            }
            has_nid = true;
        }
    }

    if !has_nid {
        report.warning("Patient: Bangladeshi citizen should have NID identifier");
    }
}

fn check_rohingya_identifiers(identifiers: &[Value], report: &mut ValidationReport) {
    let mut has_refugee_id = false;

    for identifier in identifiers {
        let (code, value) = identifier_parts(identifier);
        let (valid, label) = match code {
            Some("PROGRESS_ID") => (patterns::is_progress_id(value), "ProGress ID"),
            Some("MRC") => (patterns::is_mrc(value), "MRC"),
            Some("FCN") => (patterns::is_family_counting_number(value), "FCN"),
            _ => continue,
        };

        if !valid {
            report.error(format!("Patient: Invalid {label} format '{value}'"));
        }
        has_refugee_id = true;
    }

    if !has_refugee_id {
        report.warning("Patient: Rohingya refugee should have at least one refugee identifier");
    }
}

fn check_bangladeshi_address(address: &Value, report: &mut ValidationReport) {
    let mut has_boundary = false;

    for ext in extensions_of(address) {
        if !matches_fragment(extension_url(ext), ADMIN_BOUNDARY_EXTENSION) {
            continue;
        }
        let boundary = ext.get("valueString").and_then(Value::as_str).unwrap_or_default();
        if !patterns::is_admin_boundary(boundary) {
            report.error(format!("Address: Invalid administrative boundary format '{boundary}'"));
        }
        has_boundary = true;
    }

    if !has_boundary {
        report.warning("Address: Bangladeshi address should include administrative boundaries");
    }
}

fn check_rohingya_address(address: &Value, report: &mut ValidationReport) {
    if find_extension(extensions_of(address), CAMP_EXTENSION).is_none() {
        report.warning("Address: Rohingya refugee address should include camp information");
    }
}
