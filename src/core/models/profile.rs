//! Compliance profiles
//!
//! A profile declares what a record of one kind must carry: top-level
//! fields, extensions (by key fragment) and the permitted values of its coded
//! slots.

use std::collections::BTreeMap;

/// Named coded slots that profiles restrict
pub mod slot {
    /// Patient nationality class
    pub const NATIONALITY: &str = "nationality";
    /// Encounter service classification
    pub const SERVICE_TYPE: &str = "service-type";
    /// Coding systems accepted for a record's `code`
    pub const CODE_SYSTEM: &str = "code-system";
    /// Workflow status
    pub const STATUS: &str = "status";
    /// Order intent
    pub const INTENT: &str = "intent";
    /// Category
    pub const CATEGORY: &str = "category";
}

/// Immutable descriptor of one record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    kind: String,
    required_fields: Vec<String>,
    required_extensions: Vec<String>,
    permitted_codes: BTreeMap<String, Vec<String>>,
}

impl Profile {
    /// Start a profile for the given kind
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            required_fields: Vec::new(),
            required_extensions: Vec::new(),
            permitted_codes: BTreeMap::new(),
        }
    }

    /// Require top-level fields
    #[must_use]
    pub fn require_fields(mut self, fields: &[&str]) -> Self {
        self.required_fields.extend(fields.iter().map(ToString::to_string));
        self
    }

    /// Require extensions whose key contains each fragment
    #[must_use]
    pub fn require_extensions(mut self, fragments: &[&str]) -> Self {
        self.required_extensions.extend(fragments.iter().map(ToString::to_string));
        self
    }

    /// Restrict a coded slot to a set of values
    #[must_use]
    pub fn permit(mut self, slot: &str, codes: &[&str]) -> Self {
        self.permitted_codes
            .insert(slot.to_string(), codes.iter().map(ToString::to_string).collect());
        self
    }

    /// The kind this profile applies to
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Required top-level field names, in declaration order
    #[must_use]
    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// Required extension key fragments, in declaration order
    #[must_use]
    pub fn required_extensions(&self) -> &[String] {
        &self.required_extensions
    }

    /// Whether an extension fragment is required by this profile
    #[must_use]
    pub fn requires_extension(&self, fragment: &str) -> bool {
        self.required_extensions.iter().any(|e| e == fragment)
    }

    /// Permitted values of a coded slot (empty when unrestricted)
    #[must_use]
    pub fn permitted(&self, slot: &str) -> &[String] {
        self.permitted_codes.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `code` is a permitted value of `slot`
    #[must_use]
    pub fn permits(&self, slot: &str, code: &str) -> bool {
        self.permitted(slot).iter().any(|c| c == code)
    }
}
