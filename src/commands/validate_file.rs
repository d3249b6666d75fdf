//! Validate a single resource file

use std::path::Path;

use log::error;
use zarish_validate::Error;
use zarish_validate::config::Config;
use zarish_validate::core::registry::ProfileRegistry;
use zarish_validate::core::services::Validator;
use zarish_validate::output::{FileResult, OutputMode, UnreadableFile};
use zarish_validate::payload;

/// Validate one file, returning whether it passed
///
/// A missing file is an error. A file that cannot be read or parsed is
/// logged, rendered and reported as a failed validation.
pub fn validate_file(path: &Path, config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    if !path.exists() {
        return Err(Error::TargetNotFound(path.to_path_buf()).into());
    }

    let registry = ProfileRegistry::zarish();
    let validator =
        Validator::new(&registry).with_unknown_kinds(config.validation.unknown_kinds);

    match payload::validate_file(&validator, path) {
        Ok(report) => {
            let result = FileResult::new(path, report);
            result.render(mode);
            Ok(result.passed)
        },
        Err(err) if err.is_input_error() => {
            error!("{err}");
            UnreadableFile::new(path, &err).render(mode);
            Ok(false)
        },
        Err(err) => Err(err.into()),
    }
}
