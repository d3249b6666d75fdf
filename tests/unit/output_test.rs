//! Tests for the Output module
//!
//! Output renders reports and batch summaries as human-readable text or
//! machine-parseable JSON.

use std::path::{Path, PathBuf};

use zarish_validate::batch::{BatchSummary, FileOutcome, FileStatus};
use zarish_validate::core::models::ValidationReport;
use zarish_validate::output::{FileResult, OutputMode, format_report, format_summary};

use crate::common::{self, validate};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Report Text Tests
// =============================================================================

#[test]
fn passing_report_text() {
    let text = format_report(&validate(&common::procedure()));
    assert_eq!(text.trim_end(), "Validation passed successfully!");
}

#[test]
fn warnings_only_report_has_no_pass_line() {
    let text = format_report(&validate(&common::appointment(&["tentative"])));
    assert!(text.starts_with("WARNINGS:\n"));
    assert!(text.contains("  - Appointment: No accepted participants found"));
    assert!(!text.contains("ERRORS:"));
    assert!(!text.contains("passed successfully"));
}

#[test]
fn report_text_lists_every_error() {
    let report = validate(&serde_json::json!({"resourceType": "Encounter"}));
    let text = format_report(&report);
    assert_eq!(text.lines().filter(|l| l.starts_with("  - ")).count(), 4);
    assert!(text.starts_with("ERRORS:\n"));
}

// =============================================================================
// JSON Tests
// =============================================================================

#[test]
fn file_result_serialization() {
    let result = FileResult::new(Path::new("patient.json"), validate(&common::appointment(&[])));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["file"], "patient.json");
    assert_eq!(json["passed"], false);
    assert_eq!(json["kind"], "Appointment");
    assert_eq!(json["errors"][0]["severity"], "error");
    assert_eq!(json["errors"][0]["message"], "Appointment: Missing participants");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

fn outcome(path: &str, status: FileStatus) -> FileOutcome {
    FileOutcome {
        path: PathBuf::from("/data").join(path),
        status,
    }
}

fn sample_summary() -> BatchSummary {
    let mut failed = ValidationReport::for_kind(Some("Procedure"));
    failed.error("Procedure: Invalid status 'x'");

    BatchSummary::from_outcomes(
        Path::new("/data"),
        vec![
            outcome("a.json", FileStatus::Passed {
                report: ValidationReport::for_kind(Some("Patient")),
            }),
            outcome("b.json", FileStatus::Failed { report: failed }),
            outcome("c.json", FileStatus::Unreadable {
                reason: "invalid JSON".to_string(),
            }),
        ],
    )
}

#[test]
fn batch_summary_serialization() {
    let json = serde_json::to_value(sample_summary()).unwrap();

    assert_eq!(json["total"], 3);
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 2);
    assert_eq!(json["files"][0]["status"]["status"], "passed");
    assert_eq!(json["files"][2]["status"]["status"], "unreadable");
    assert_eq!(json["files"][2]["status"]["reason"], "invalid JSON");
    assert!(json["checked_at"].is_string());
}

#[test]
fn summary_text() {
    let text = format_summary(&sample_summary());
    assert!(text.contains("Total files: 3"));
    assert!(text.contains("Passed: 1"));
    assert!(text.contains("Failed: 2"));
    assert!(text.contains("Success rate: 33.3%"));
}

#[test]
fn empty_summary_rate_is_not_applicable() {
    let summary = BatchSummary::from_outcomes(Path::new("/data"), vec![]);
    assert!(format_summary(&summary).contains("Success rate: n/a"));
    assert!(summary.all_passed());
}
