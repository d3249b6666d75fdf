//! Profile registry - record kind to compliance profile
//!
//! The registry is built once and then only read. The engine borrows it, so
//! tests and callers can construct their own registries side by side.

use std::collections::BTreeMap;

use crate::core::models::{Profile, slot};

/// Extension fragment identifying a patient's nationality class
pub const NATIONALITY_EXTENSION: &str = "patient-nationality";
/// Extension fragment identifying a practitioner's BMDC registration
pub const BMDC_EXTENSION: &str = "bmdc-registration";
/// Extension fragment identifying an encounter's service classification
pub const SERVICE_TYPE_EXTENSION: &str = "service-type";

/// Nationality class: Bangladeshi citizen
pub const NATIONALITY_BANGLADESHI: &str = "BD";
/// Nationality class: Rohingya refugee
pub const NATIONALITY_ROHINGYA: &str = "ROH";
/// Nationality class: other
pub const NATIONALITY_OTHER: &str = "OTH";

/// Read-only mapping from record kind to profile
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile, replacing any previous profile of the same kind
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.kind().to_string(), profile);
        self
    }

    /// The ZARISH HIS profile set
    #[must_use]
    pub fn zarish() -> Self {
        Self::new()
            .with_profile(
                Profile::new("Patient")
                    .require_fields(&["name", "gender", "birthDate"])
                    .require_extensions(&[NATIONALITY_EXTENSION])
                    .permit(
                        slot::NATIONALITY,
                        &[NATIONALITY_BANGLADESHI, NATIONALITY_ROHINGYA, NATIONALITY_OTHER],
                    ),
            )
            .with_profile(
                Profile::new("Practitioner")
                    .require_fields(&["name", "qualification"])
                    .require_extensions(&[BMDC_EXTENSION]),
            )
            .with_profile(
                Profile::new("Encounter")
                    .require_fields(&["status", "class", "subject"])
                    .require_extensions(&[SERVICE_TYPE_EXTENSION])
                    .permit(
                        slot::SERVICE_TYPE,
                        &["GOPD", "SOPD", "IPD", "EMERGENCY", "NCD", "MATERNAL"],
                    ),
            )
            .with_profile(
                Profile::new("Observation")
                    .require_fields(&["status", "code", "subject"])
                    .permit(
                        slot::CODE_SYSTEM,
                        &[
                            "http://loinc.org",
                            "https://zs-his.github.io/docs/fhir/CodeSystem/zarish-observation-codes",
                        ],
                    ),
            )
            .with_profile(
                Profile::new("MedicationRequest")
                    .require_fields(&["status", "intent", "medication", "subject"])
                    .permit(slot::INTENT, &["order", "plan", "proposal"])
                    .permit(slot::CATEGORY, &["inpatient", "outpatient", "community", "discharge"]),
            )
            .with_profile(
                Profile::new("Procedure")
                    .require_fields(&["status", "code", "subject"])
                    .permit(
                        slot::STATUS,
                        &[
                            "preparation",
                            "in-progress",
                            "not-done",
                            "on-hold",
                            "stopped",
                            "completed",
                            "entered-in-error",
                            "unknown",
                        ],
                    )
                    .permit(slot::CODE_SYSTEM, &["http://snomed.info/sct"]),
            )
            .with_profile(
                Profile::new("Appointment").require_fields(&["status", "participant"]).permit(
                    slot::STATUS,
                    &[
                        "proposed",
                        "pending",
                        "booked",
                        "arrived",
                        "fulfilled",
                        "cancelled",
                        "noshow",
                        "entered-in-error",
                        "checked-in",
                        "waitlist",
                    ],
                ),
            )
            .with_profile(
                Profile::new("DiagnosticReport")
                    .require_fields(&["status", "code", "subject"])
                    .permit(
                        slot::STATUS,
                        &[
                            "registered",
                            "partial",
                            "preliminary",
                            "final",
                            "amended",
                            "corrected",
                            "appended",
                            "cancelled",
                            "entered-in-error",
                            "unknown",
                        ],
                    )
                    .permit(slot::CATEGORY, &["LAB", "RAD", "PATH", "MICRO"]),
            )
    }

    /// Profile for a kind
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&Profile> {
        self.profiles.get(kind)
    }

    /// Whether a kind is registered
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.profiles.contains_key(kind)
    }

    /// Registered kind names, sorted
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of registered profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
