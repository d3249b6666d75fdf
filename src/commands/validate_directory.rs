//! Validate every resource file under a directory

use std::path::Path;

use log::{debug, warn};
use zarish_validate::batch::{BatchDriver, Discovery};
use zarish_validate::config::Config;
use zarish_validate::core::registry::ProfileRegistry;
use zarish_validate::core::services::Validator;
use zarish_validate::output::OutputMode;

/// Validate a directory tree, returning whether every file passed
pub fn validate_directory(dir: &Path, config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let discovery = Discovery::new(dir, &config.batch)?;
    let found = discovery.find_files()?;
    debug!("Found {} payload file(s) under {}", found.len(), dir.display());

    if found.is_empty() {
        warn!("No payload files found under {}", dir.display());
    }

    let registry = ProfileRegistry::zarish();
    let validator =
        Validator::new(&registry).with_unknown_kinds(config.validation.unknown_kinds);

    let summary = BatchDriver::new(validator).run(discovery.root(), &found);
    summary.render(mode);

    Ok(summary.all_passed())
}
