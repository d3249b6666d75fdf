//! Payload loading
//!
//! Reads one record file into a JSON value. The file is read in full and
//! closed before the value is handed to the validator.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::models::ValidationReport;
use crate::core::services::Validator;
use crate::error::{Error, Result};

/// Read and parse a record file
pub fn read_record(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read, parse and validate a record file
pub fn validate_file(validator: &Validator<'_>, path: &Path) -> Result<ValidationReport> {
    let record = read_record(path)?;
    Ok(validator.validate(&record))
}
