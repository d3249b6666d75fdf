//! Core validation logic
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Record, Profile, Finding, ValidationReport, Severity)
//! - `patterns` - Identifier and code format predicates
//! - `registry` - Kind to profile mapping
//! - `rules/` - Kind-specific rule sets
//! - `services/` - Validation engine and extension key matcher

pub mod models;
pub mod patterns;
pub mod registry;
pub mod rules;
pub mod services;
