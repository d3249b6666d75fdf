//! Batch validation - every payload under a directory
//!
//! [`Discovery`] walks a directory tree for payload files; [`BatchDriver`]
//! validates each one independently and aggregates the outcome.
//!
//! # Examples
//!
//! ```no_run
//! use zarish_validate::batch::{BatchDriver, Discovery};
//! use zarish_validate::config::BatchConfig;
//! use zarish_validate::core::registry::ProfileRegistry;
//! use zarish_validate::core::services::Validator;
//!
//! let registry = ProfileRegistry::zarish();
//! let discovery = Discovery::new("resources", &BatchConfig::default()).unwrap();
//! let found = discovery.find_files().unwrap();
//! let summary = BatchDriver::new(Validator::new(&registry)).run(discovery.root(), &found);
//! println!("{} of {} passed", summary.passed, summary.total);
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::BatchConfig;
use crate::core::models::ValidationReport;
use crate::core::services::Validator;
use crate::error::{Error, Result};
use crate::payload;

/// Finds payload files under a root directory
#[derive(Debug)]
pub struct Discovery {
    /// Root directory to walk
    root: PathBuf,
    /// Accepted extensions, lowercase, without the dot
    extensions: Vec<String>,
    include_hidden: bool,
    follow_links: bool,
    exclude: Vec<glob::Pattern>,
}

impl Discovery {
    /// Create a discovery rooted at the given directory
    pub fn new(root: impl AsRef<Path>, config: &BatchConfig) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(Error::TargetNotFound(root));
        }

        let exclude = config
            .exclude
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let extensions =
            config.extensions.iter().map(|e| e.trim_start_matches('.').to_lowercase()).collect();

        Ok(Self {
            root,
            extensions,
            include_hidden: config.include_hidden,
            follow_links: config.follow_links,
            exclude,
        })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find all payload files, sorted for deterministic output
    ///
    /// Entries below the root that cannot be walked (dangling links, link
    /// loops, unreadable directories) are collected as broken rather than
    /// aborting the walk. Only a failure on the root itself is an error.
    pub fn find_files(&self) -> Result<Discovered> {
        let mut found = Discovered::default();
        let root = &self.root;

        let walker = WalkDir::new(root).follow_links(self.follow_links).into_iter();
        for entry in walker.filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == root {
                return true;
            }
            self.include_hidden || !Self::is_hidden(e)
        }) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let below_root =
                        err.path().filter(|p| *p != root.as_path()).map(Path::to_path_buf);
                    let Some(path) = below_root else {
                        return Err(err.into());
                    };
                    if self.is_broken_candidate(&path, err.loop_ancestor().is_some()) {
                        warn!("Cannot read {}: {err}", path.display());
                        found.broken.push((path, err.to_string()));
                    }
                    continue;
                },
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.has_payload_extension(path) || self.is_excluded(path) {
                continue;
            }

            found.files.push(path.to_path_buf());
        }

        found.files.sort();
        found.broken.sort();
        Ok(found)
    }

    /// Whether an unwalkable entry would have been validated
    fn is_broken_candidate(&self, path: &Path, is_loop: bool) -> bool {
        let hidden = path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.'));
        if (hidden && !self.include_hidden) || self.is_excluded(path) {
            return false;
        }
        is_loop || path.is_dir() || self.has_payload_extension(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let excluded = self.exclude.iter().any(|p| p.matches_path(relative));
        if excluded {
            debug!("Excluded {}", relative.display());
        }
        excluded
    }

    fn has_payload_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Check if an entry is hidden (starts with .)
    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}

/// Everything a walk turned up
#[derive(Debug, Clone, Default)]
pub struct Discovered {
    /// Payload files, sorted
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read, with the reason, sorted
    pub broken: Vec<(PathBuf, String)>,
}

impl Discovered {
    /// Number of entries that will get an outcome
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len() + self.broken.len()
    }

    /// Whether the walk found nothing to report on
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.broken.is_empty()
    }
}

/// What happened to one file in a batch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    /// Parsed and validated without errors
    Passed {
        /// The file's findings (warnings only)
        report: ValidationReport,
    },
    /// Parsed and validated with at least one error
    Failed {
        /// The file's findings
        report: ValidationReport,
    },
    /// Could not be read or parsed
    Unreadable {
        /// Why the payload could not be loaded
        reason: String,
    },
}

impl FileStatus {
    /// Whether the file counts as passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// One file's outcome
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Path of the payload
    pub path: PathBuf,
    /// Outcome
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    /// Path relative to `root` for display, falling back to the full path
    #[must_use]
    pub fn display_path(&self, root: &Path) -> String {
        self.path.strip_prefix(root).unwrap_or(&self.path).display().to_string()
    }
}

/// Aggregate result of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Directory the batch was run on
    pub root: PathBuf,
    /// When the run finished
    pub checked_at: DateTime<Utc>,
    /// Number of payload files found
    pub total: usize,
    /// Files that passed
    pub passed: usize,
    /// Files that failed validation or could not be read
    pub failed: usize,
    /// `passed / total * 100`, absent when no files were found
    pub success_rate: Option<f64>,
    /// Per-file outcomes, in discovery order
    pub files: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Build a summary from per-file outcomes
    #[must_use]
    pub fn from_outcomes(root: &Path, files: Vec<FileOutcome>) -> Self {
        let total = files.len();
        let passed = files.iter().filter(|f| f.status.is_passed()).count();
        Self {
            root: root.to_path_buf(),
            checked_at: Utc::now(),
            total,
            passed,
            failed: total - passed,
            success_rate: success_rate(passed, total),
            files,
        }
    }

    /// Whether every file passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes of the files that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.status.is_passed())
    }
}

/// Percentage of passed files, `None` for an empty batch
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn success_rate(passed: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| passed as f64 / total as f64 * 100.0)
}

/// Validates a list of files one at a time
#[derive(Debug, Clone, Copy)]
pub struct BatchDriver<'r> {
    validator: Validator<'r>,
}

impl<'r> BatchDriver<'r> {
    /// Create a driver around a validator
    #[must_use]
    pub const fn new(validator: Validator<'r>) -> Self {
        Self { validator }
    }

    /// Validate one file
    ///
    /// A file that cannot be read or parsed becomes an `Unreadable` outcome;
    /// it never aborts the batch.
    #[must_use]
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        let status = match payload::validate_file(&self.validator, path) {
            Ok(report) if report.passed() => FileStatus::Passed { report },
            Ok(report) => FileStatus::Failed { report },
            Err(err) => FileStatus::Unreadable {
                reason: err.to_string(),
            },
        };

        FileOutcome {
            path: path.to_path_buf(),
            status,
        }
    }

    /// Validate every discovered file and aggregate the results
    ///
    /// Broken entries count as unreadable files. Outcomes are ordered by path.
    #[must_use]
    pub fn run(&self, root: &Path, discovered: &Discovered) -> BatchSummary {
        let mut outcomes: Vec<FileOutcome> =
            discovered.files.iter().map(|path| self.check_file(path)).collect();
        outcomes.extend(discovered.broken.iter().map(|(path, reason)| FileOutcome {
            path: path.clone(),
            status: FileStatus::Unreadable {
                reason: reason.clone(),
            },
        }));
        outcomes.sort_by(|a, b| a.path.cmp(&b.path));

        for outcome in &outcomes {
            let name = outcome.display_path(root);
            match &outcome.status {
                FileStatus::Passed { .. } => info!("PASS {name}"),
                FileStatus::Failed { report } => {
                    error!("FAIL {name} ({} error(s))", report.errors.len());
                },
                FileStatus::Unreadable { reason } => error!("FAIL {name}: {reason}"),
            }
        }

        BatchSummary::from_outcomes(root, outcomes)
    }
}
