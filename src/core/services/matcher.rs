//! Extension key matcher - matches extension keys against required fragments
//!
//! Extension keys are canonical URLs that get versioned and re-namespaced
//! over time (`.../StructureDefinition/patient-nationality|1.2`). Profiles
//! therefore name extensions by a key fragment, and a key matches when it
//! contains the fragment anywhere.

use serde_json::Value;

use crate::core::models::record::extension_url;

/// Check if an extension key matches a required fragment
///
/// # Arguments
///
/// * `key` - The extension's identifying key (its `url`)
/// * `fragment` - The fragment a profile requires
///
/// # Returns
///
/// `true` if `key` contains `fragment`. An empty fragment matches every key.
#[must_use]
pub fn matches_fragment(key: &str, fragment: &str) -> bool {
    key.contains(fragment)
}

/// Find the first extension whose key matches `fragment`
#[must_use]
pub fn find_extension<'a>(extensions: &'a [Value], fragment: &str) -> Option<&'a Value> {
    extensions.iter().find(|ext| matches_fragment(extension_url(ext), fragment))
}

/// Whether any extension's key matches `fragment`
#[must_use]
pub fn has_extension(extensions: &[Value], fragment: &str) -> bool {
    find_extension(extensions, fragment).is_some()
}
