//! Validation engine - profile-driven record validation
//!
//! This service contains the pure validation logic: it reads a parsed record,
//! looks up the record's profile and collects findings. It has no I/O.
//!
//! Checks run in a fixed order:
//!
//! 1. kind discriminator present
//! 2. kind registered
//! 3. required fields
//! 4. required extensions
//! 5. kind-specific rule set
//!
//! Steps 3 and 4 always run in full before step 5, so a record missing basic
//! shape still gets every structural finding.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::models::{Record, ValidationReport};
use crate::core::registry::ProfileRegistry;
use crate::core::rules::RuleSet;
use crate::core::services::matcher::has_extension;

/// How records of an unregistered kind are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKindPolicy {
    /// One warning; the record passes
    #[default]
    Permissive,
    /// One error; the record fails
    Strict,
}

impl std::fmt::Display for UnknownKindPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for UnknownKindPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Invalid unknown-kind policy: {s}. Use: permissive, strict")),
        }
    }
}

/// Validates records against a borrowed profile registry
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r ProfileRegistry,
    unknown_kinds: UnknownKindPolicy,
}

impl<'r> Validator<'r> {
    /// Create a permissive validator over `registry`
    #[must_use]
    pub const fn new(registry: &'r ProfileRegistry) -> Self {
        Self {
            registry,
            unknown_kinds: UnknownKindPolicy::Permissive,
        }
    }

    /// Set how unregistered kinds are treated
    #[must_use]
    pub const fn with_unknown_kinds(mut self, policy: UnknownKindPolicy) -> Self {
        self.unknown_kinds = policy;
        self
    }

    /// The registry this validator reads profiles from
    #[must_use]
    pub const fn registry(&self) -> &'r ProfileRegistry {
        self.registry
    }

    /// Validate one record
    ///
    /// Never fails: a malformed record just produces more findings. Every
    /// call returns a fresh report.
    #[must_use]
    pub fn validate(&self, record: &Value) -> ValidationReport {
        let record = Record::new(record);

        let Some(kind) = record.kind() else {
            let mut report = ValidationReport::for_kind(None);
            report.error("Missing resourceType");
            return report;
        };

        let mut report = ValidationReport::for_kind(Some(kind));

        let Some(profile) = self.registry.get(kind) else {
            let message = format!("Unknown resource type: {kind}");
            match self.unknown_kinds {
                UnknownKindPolicy::Permissive => report.warning(message),
                UnknownKindPolicy::Strict => report.error(message),
            }
            return report;
        };

        debug!("Validating {kind} against its profile");

        for field in profile.required_fields() {
            if !record.has_field(field) {
                report.error(format!("{kind}: Missing required field '{field}'"));
            }
        }

        let extensions = record.extensions();
        for fragment in profile.required_extensions() {
            if !has_extension(extensions, fragment) {
                report.error(format!("{kind}: Missing required extension '{fragment}'"));
            }
        }

        if let Some(rules) = RuleSet::for_kind(kind) {
            rules.apply(record, profile, &mut report);
        }

        debug!(
            "{kind}: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );

        report
    }

    /// Validate one record, returning only whether it passed
    #[must_use]
    pub fn passes(&self, record: &Value) -> bool {
        self.validate(record).passed()
    }
}
