//! Library error type
//!
//! Only environment and input problems are errors. Anything wrong *inside*
//! a parseable record is a finding, never an `Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, reading or configuring validation input
#[derive(Debug, Error)]
pub enum Error {
    /// The file or directory to validate does not exist
    #[error("target not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// A payload could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The payload path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A payload is not valid JSON
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// The payload path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Error walking a directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// A configuration file could not be read or parsed
    #[error("invalid config {}: {message}", .path.display())]
    Config {
        /// The configuration file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// A batch exclude pattern is not a valid glob
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Whether this error concerns a single payload rather than the run
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Json { .. })
    }
}

/// Result alias for library operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
