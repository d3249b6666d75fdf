//! Business logic services
//!
//! Pure validation logic that operates on parsed records and returns
//! reports. These services have no I/O dependencies.
//!
//! - [`engine`] - Validate records against their profiles
//! - [`matcher`] - Match extension keys against required fragments

pub mod engine;
pub mod matcher;

pub use engine::{UnknownKindPolicy, Validator};
pub use matcher::{find_extension, has_extension, matches_fragment};
