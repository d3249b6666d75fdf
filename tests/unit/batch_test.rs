//! Tests for batch discovery and the batch driver

use serde_json::json;
use zarish_validate::batch::{BatchDriver, Discovery, FileStatus};
use zarish_validate::config::BatchConfig;
use zarish_validate::core::registry::ProfileRegistry;
use zarish_validate::core::services::Validator;

use crate::common::{self, TestDir};

fn discover(dir: &TestDir, config: &BatchConfig) -> Vec<String> {
    Discovery::new(dir.path(), config)
        .unwrap()
        .find_files()
        .unwrap()
        .files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn discovery_is_recursive_and_sorted() {
    let dir = TestDir::new();
    dir.add_file("z.json", "{}");
    dir.add_file("patients/b.json", "{}");
    dir.add_file("patients/a.json", "{}");
    dir.add_file("notes.md", "# notes");

    assert_eq!(
        discover(&dir, &BatchConfig::default()),
        vec!["patients/a.json", "patients/b.json", "z.json"]
    );
}

#[test]
fn discovery_skips_hidden_by_default() {
    let dir = TestDir::new();
    dir.add_file("a.json", "{}");
    dir.add_file(".cache/b.json", "{}");
    dir.add_file(".c.json", "{}");

    assert_eq!(discover(&dir, &BatchConfig::default()), vec!["a.json"]);

    let config = BatchConfig {
        include_hidden: true,
        ..BatchConfig::default()
    };
    assert_eq!(discover(&dir, &config), vec![".c.json", ".cache/b.json", "a.json"]);
}

#[test]
fn discovery_honours_extensions_and_excludes() {
    let dir = TestDir::new();
    dir.add_file("a.json", "{}");
    dir.add_file("b.fhir.JSON", "{}");
    dir.add_file("c.ndjson", "{}");
    dir.add_file("drafts/d.json", "{}");

    let config = BatchConfig {
        extensions: vec![".json".to_string(), "ndjson".to_string()],
        exclude: vec!["drafts/**".to_string()],
        ..BatchConfig::default()
    };
    assert_eq!(discover(&dir, &config), vec!["a.json", "b.fhir.JSON", "c.ndjson"]);
}

// =============================================================================
// Batch Driver
// =============================================================================

#[test]
fn unparsable_files_fail_without_affecting_others() {
    let dir = TestDir::new();
    dir.add_record("1-patient.json", &common::bd_patient());
    dir.add_file("2-broken.json", "{\"resourceType\": \"Patient\",");
    dir.add_record("3-procedure.json", &json!({"resourceType": "Procedure"}));
    dir.add_file("4-empty.json", "");
    dir.add_record("5-unknown.json", &json!({"resourceType": "Bundle"}));

    let registry = ProfileRegistry::zarish();
    let discovery = Discovery::new(dir.path(), &BatchConfig::default()).unwrap();
    let found = discovery.find_files().unwrap();
    let summary = BatchDriver::new(Validator::new(&registry)).run(discovery.root(), &found);

    assert_eq!(summary.total, 5);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.success_rate, Some(40.0));
    assert!(!summary.all_passed());

    let statuses: Vec<&str> = summary
        .files
        .iter()
        .map(|f| match f.status {
            FileStatus::Passed { .. } => "passed",
            FileStatus::Failed { .. } => "failed",
            FileStatus::Unreadable { .. } => "unreadable",
        })
        .collect();
    assert_eq!(statuses, vec!["passed", "unreadable", "failed", "unreadable", "passed"]);
}

#[test]
fn each_file_gets_its_own_report() {
    let dir = TestDir::new();
    dir.add_record("a.json", &json!({"resourceType": "Procedure"}));
    dir.add_record("b.json", &common::procedure());

    let registry = ProfileRegistry::zarish();
    let discovery = Discovery::new(dir.path(), &BatchConfig::default()).unwrap();
    let found = discovery.find_files().unwrap();
    let summary = BatchDriver::new(Validator::new(&registry)).run(discovery.root(), &found);

    match &summary.files[1].status {
        FileStatus::Passed { report } => assert!(report.is_clean()),
        other => panic!("expected b.json to pass, got {other:?}"),
    }
}

#[test]
fn check_file_reports_missing_file_as_unreadable() {
    let dir = TestDir::new();
    let registry = ProfileRegistry::zarish();
    let outcome =
        BatchDriver::new(Validator::new(&registry)).check_file(&dir.path().join("gone.json"));
    assert!(matches!(outcome.status, FileStatus::Unreadable { .. }));
}

#[cfg(unix)]
#[test]
fn dangling_link_counts_as_unreadable_without_aborting() {
    let dir = TestDir::new();
    dir.add_record("a.json", &json!({"resourceType": "Bundle"}));
    std::os::unix::fs::symlink(dir.path().join("missing.json"), dir.path().join("b.json"))
        .unwrap();
    dir.add_record("c.json", &json!({"resourceType": "Bundle"}));

    let registry = ProfileRegistry::zarish();
    let discovery = Discovery::new(dir.path(), &BatchConfig::default()).unwrap();
    let found = discovery.find_files().unwrap();
    assert_eq!(found.files.len(), 2);
    assert_eq!(found.broken.len(), 1);

    let summary = BatchDriver::new(Validator::new(&registry)).run(discovery.root(), &found);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);

    let broken = &summary.files[1];
    assert_eq!(broken.display_path(dir.path()), "b.json");
    assert!(matches!(broken.status, FileStatus::Unreadable { .. }));
}

#[test]
fn outcome_serializes_status_inline() {
    let dir = TestDir::new();
    dir.add_record("a.json", &common::procedure());
    dir.add_file("b.json", "{");

    let registry = ProfileRegistry::zarish();
    let discovery = Discovery::new(dir.path(), &BatchConfig::default()).unwrap();
    let found = discovery.find_files().unwrap();
    let summary = BatchDriver::new(Validator::new(&registry)).run(discovery.root(), &found);

    let value = serde_json::to_value(&summary).unwrap();
    let files = value["files"].as_array().unwrap();
    assert_eq!(files[0]["status"], "passed");
    assert!(files[0]["report"]["errors"].as_array().unwrap().is_empty());
    assert_eq!(files[1]["status"], "unreadable");
    assert!(files[1]["reason"].as_str().unwrap().contains("invalid JSON"));
}
