//! Property-based tests for the matcher, patterns and engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use serde_json::json;
use zarish_validate::core::patterns;
use zarish_validate::core::services::matches_fragment;

use crate::common::{self, identifier, validate};

proptest! {
    /// A key always matches a fragment it contains
    #[test]
    fn key_matches_embedded_fragment(
        prefix in "[a-z:/.]{0,20}",
        fragment in "[a-z-]{1,20}",
        suffix in "[|0-9.]{0,6}"
    ) {
        let key = format!("{prefix}{fragment}{suffix}");
        prop_assert!(matches_fragment(&key, &fragment));
    }

    /// A fragment longer than the key never matches
    #[test]
    fn longer_fragment_never_matches(key in "[a-z]{0,10}", extra in "[a-z]{1,5}") {
        let fragment = format!("{key}{extra}");
        prop_assert!(!matches_fragment(&key, &fragment));
    }

    /// Any 13-digit string is a national ID, any other length is not
    #[test]
    fn national_id_length(digits in "[0-9]{1,20}") {
        prop_assert_eq!(patterns::is_national_id(&digits), digits.len() == 13);
    }

    /// Unknown kinds pass with exactly one warning whatever they contain
    #[test]
    fn unknown_kind_always_passes(kind in "[A-Z][a-z]{2,12}X", field in "[a-z]{1,8}", n in any::<i64>()) {
        let report = validate(&json!({"resourceType": kind, field: n}));
        prop_assert!(report.passed());
        prop_assert!(report.errors.is_empty());
        prop_assert_eq!(report.warnings.len(), 1);
    }

    /// Validating the same record twice yields identical reports
    #[test]
    fn validation_is_idempotent(nid in "[0-9]{0,15}", code in "(BD|ROH|OTH|XX)") {
        let mut record = common::bd_patient();
        record["extension"] = json!([common::nationality(&code)]);
        record["identifier"] = json!([identifier("NID", &nid)]);
        prop_assert_eq!(validate(&record), validate(&record));
    }
}
