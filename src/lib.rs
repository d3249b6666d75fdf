//! zarish-validate - compliance validation for ZARISH HIS clinical records
//!
//! This library checks FHIR-style JSON resources against the ZARISH HIS
//! profiles: required fields, required extensions, coded value sets and
//! kind-specific rules such as nationality-dependent identifier formats.
//! Findings are accumulated per record as errors and warnings; only errors
//! fail a record.
//!
//! ```
//! use serde_json::json;
//! use zarish_validate::core::registry::ProfileRegistry;
//! use zarish_validate::core::services::Validator;
//!
//! let registry = ProfileRegistry::zarish();
//! let validator = Validator::new(&registry);
//!
//! let report = validator.validate(&json!({"resourceType": "Bundle"}));
//! assert!(report.passed());
//! assert_eq!(report.warnings.len(), 1);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod payload;

pub use error::{Error, Result};
