//! Directory validation workflow tests

use predicates::prelude::*;
use tempfile::TempDir;

use super::{bad_practitioner, rohingya_patient_without_ids, valid_patient, write_resource, zarish};

/// Mixed directory: clean, warning-only, failing and corrupt files
fn mixed_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_resource(temp.path(), "patients/karim.json", &valid_patient());
    write_resource(temp.path(), "patients/amina.json", &rohingya_patient_without_ids());
    write_resource(temp.path(), "staff/doctor.json", &bad_practitioner());
    write_resource(temp.path(), "staff/corrupt.json", "{\"resourceType\": ");
    write_resource(temp.path(), "notes/readme.txt", "not a resource");
    temp
}

/// Failures are listed, the summary counts every payload file
#[test]
fn test_directory_mixed_results() {
    let temp = mixed_tree();

    zarish()
        .args(["--directory", "."])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation errors in staff/doctor.json:"))
        .stdout(predicate::str::contains("Could not validate staff/corrupt.json:"))
        .stdout(predicate::str::contains("Total files: 4"))
        .stdout(predicate::str::contains("Passed: 2"))
        .stdout(predicate::str::contains("Failed: 2"))
        .stdout(predicate::str::contains("Success rate: 50.0%"))
        .stdout(predicate::str::contains("readme.txt").not());
}

/// Excluding the failing files lets the run pass
#[test]
fn test_directory_exclude_patterns() {
    let temp = mixed_tree();
    write_resource(temp.path(), ".zarish-validate.toml", "[batch]\nexclude = [\"staff/**\"]\n");

    zarish()
        .args(["--directory", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 2"))
        .stdout(predicate::str::contains("Success rate: 100.0%"));
}

/// JSON summary is machine readable and lists every file
#[test]
fn test_directory_json_summary() {
    let temp = mixed_tree();

    let output = zarish()
        .args(["--directory", ".", "--json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["passed"], 2);
    assert_eq!(summary["failed"], 2);
    assert_eq!(summary["files"].as_array().unwrap().len(), 4);

    let statuses: Vec<&str> = summary["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"unreadable"));
    assert!(statuses.contains(&"failed"));
}

/// An empty directory is not a failure
#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();

    zarish()
        .args(["--directory", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 0"))
        .stdout(predicate::str::contains("Success rate: n/a"));
}
