//! Validator configuration
//!
//! Optional TOML file controlling the unknown-kind policy and batch file
//! discovery. Looked up at `--config <path>` or, failing that,
//! `.zarish-validate.toml` in the working directory. Without either, the
//! defaults apply.
//!
//! ```toml
//! [validation]
//! unknown_kinds = "strict"
//!
//! [batch]
//! extensions = ["json"]
//! include_hidden = false
//! follow_links = true
//! exclude = ["**/drafts/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::UnknownKindPolicy;
use crate::error::{Error, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".zarish-validate.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Validation behaviour
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Batch discovery
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Validation behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// How records of an unregistered kind are treated
    #[serde(default)]
    pub unknown_kinds: UnknownKindPolicy,
}

/// Batch discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// File extensions treated as payloads (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Descend into hidden files and directories
    #[serde(default)]
    pub include_hidden: bool,
    /// Follow symbolic links
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
    /// Glob patterns of paths (relative to the batch root) to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

const fn default_follow_links() -> bool {
    true
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_hidden: false,
            follow_links: default_follow_links(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Resolve configuration for a run
    ///
    /// An explicit path must exist and parse. Otherwise the file in `cwd` is
    /// used if present, and the defaults if not.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config {
                    path: path.to_path_buf(),
                    message: "file does not exist".to_string(),
                });
            }
            return Self::load_from(path);
        }

        let local = Self::local_path(cwd);
        if local.is_file() {
            return Self::load_from(&local);
        }

        Ok(Self::default())
    }

    /// The config file location inside `dir`
    #[must_use]
    pub fn local_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse config text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
