//! Read-only view over a parsed clinical record
//!
//! Records are untyped JSON documents. Every accessor here tolerates
//! arbitrary shapes: a field of the wrong type reads the same as a missing
//! one, so a malformed record yields findings rather than panics.

use serde_json::Value;

/// Name of the field carrying a record's kind
pub const KIND_FIELD: &str = "resourceType";

/// Name of the array holding a structure's extensions
pub const EXTENSION_FIELD: &str = "extension";

/// A borrowed clinical record
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    value: &'a Value,
}

impl<'a> Record<'a> {
    /// Wrap a parsed JSON value
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value
    #[must_use]
    pub const fn as_value(self) -> &'a Value {
        self.value
    }

    /// The record kind, if `resourceType` is a non-empty string
    #[must_use]
    pub fn kind(self) -> Option<&'a str> {
        self.str_field(KIND_FIELD).filter(|k| !k.is_empty())
    }

    /// Whether the record has a key with this name (any value, even null)
    #[must_use]
    pub fn has_field(self, name: &str) -> bool {
        self.value.as_object().is_some_and(|obj| obj.contains_key(name))
    }

    /// Raw field value
    #[must_use]
    pub fn get(self, name: &str) -> Option<&'a Value> {
        self.value.get(name)
    }

    /// Field value if it is a string
    #[must_use]
    pub fn str_field(self, name: &str) -> Option<&'a str> {
        self.value.get(name).and_then(Value::as_str)
    }

    /// Field value as an array; missing or non-array fields read as empty
    #[must_use]
    pub fn array(self, name: &str) -> &'a [Value] {
        array_field(self.value, name)
    }

    /// Top-level extensions
    #[must_use]
    pub fn extensions(self) -> &'a [Value] {
        extensions_of(self.value)
    }
}

/// Array-valued field of any JSON value; empty when absent or mistyped
#[must_use]
pub fn array_field<'a>(value: &'a Value, name: &str) -> &'a [Value] {
    value.get(name).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

/// The `extension` array of a record or nested structure
#[must_use]
pub fn extensions_of(value: &Value) -> &[Value] {
    array_field(value, EXTENSION_FIELD)
}

/// The identifying key of an extension, or `""` when it has none
#[must_use]
pub fn extension_url(extension: &Value) -> &str {
    extension.get("url").and_then(Value::as_str).unwrap_or("")
}

/// First entry of a CodeableValue's `coding` list
#[must_use]
pub fn first_coding(codeable: &Value) -> Option<&Value> {
    array_field(codeable, "coding").first()
}

/// Code of the authoritative (first) coding
#[must_use]
pub fn first_code(codeable: &Value) -> Option<&str> {
    first_coding(codeable).and_then(|c| c.get("code")).and_then(Value::as_str)
}

/// Coding system of the authoritative (first) coding
///
/// `None` only when there is no coding. A coding without a string `system`
/// reads as `""`.
#[must_use]
pub fn first_system(codeable: &Value) -> Option<&str> {
    first_coding(codeable).map(|c| c.get("system").and_then(Value::as_str).unwrap_or_default())
}

/// Code carried by a field that may be either a bare code string or a
/// CodeableValue
#[must_use]
pub fn code_of(value: &Value) -> Option<&str> {
    value.as_str().or_else(|| first_code(value))
}
