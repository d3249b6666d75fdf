//! Domain models for the validator
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Record`] - Read-only view over a parsed clinical record
//! - [`Profile`] - What a record kind must carry
//! - [`Finding`] - One reported error or warning
//! - [`ValidationReport`] - All findings of one validation pass
//! - [`Severity`] - Whether a finding fails the record

mod finding;
mod profile;
pub mod record;
mod severity;

pub use finding::{Finding, ValidationReport};
pub use profile::{Profile, slot};
pub use record::Record;
pub use severity::Severity;
