//! Identifier and code format predicates
//!
//! Fixed, anchored formats used by the rule sets. All functions are pure.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

static NATIONAL_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{13}$"));
static PROGRESS_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^PROG\d{9}$"));
static MRC: LazyLock<Regex> = LazyLock::new(|| compile(r"^MRC\d{9}$"));
static FAMILY_COUNTING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^FCN-[A-Z]{3}-BLOCK-[A-Z]-\d{3}$"));
static ADMIN_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^BD\.\d+(\.\d+(\.\d+(\.\d+)?)?)?$"));
static BMDC_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^BMDC\d{6}$"));

/// Bangladeshi national ID: exactly 13 digits
#[must_use]
pub fn is_national_id(value: &str) -> bool {
    NATIONAL_ID.is_match(value)
}

/// UNHCR proGres individual ID: `PROG` followed by 9 digits
#[must_use]
pub fn is_progress_id(value: &str) -> bool {
    PROGRESS_ID.is_match(value)
}

/// MRC card number: `MRC` followed by 9 digits
#[must_use]
pub fn is_mrc(value: &str) -> bool {
    MRC.is_match(value)
}

/// Family counting number, e.g. `FCN-KTP-BLOCK-A-001`
#[must_use]
pub fn is_family_counting_number(value: &str) -> bool {
    FAMILY_COUNTING_NUMBER.is_match(value)
}

/// Administrative boundary code: `BD.<division>[.<district>[.<upazila>[.<union>]]]`
#[must_use]
pub fn is_admin_boundary(value: &str) -> bool {
    ADMIN_BOUNDARY.is_match(value)
}

/// BMDC registration number: `BMDC` followed by 6 digits
#[must_use]
pub fn is_bmdc_number(value: &str) -> bool {
    BMDC_NUMBER.is_match(value)
}
