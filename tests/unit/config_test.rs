//! Tests for configuration loading

use std::path::Path;

use zarish_validate::Error;
use zarish_validate::config::{CONFIG_FILE_NAME, Config};
use zarish_validate::core::services::UnknownKindPolicy;

use crate::common::TestDir;

#[test]
fn defaults_without_any_file() {
    let dir = TestDir::new();
    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.validation.unknown_kinds, UnknownKindPolicy::Permissive);
}

#[test]
fn local_file_is_picked_up() {
    let dir = TestDir::new();
    dir.add_file(CONFIG_FILE_NAME, "[validation]\nunknown_kinds = \"strict\"\n");
    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.validation.unknown_kinds, UnknownKindPolicy::Strict);
}

#[test]
fn explicit_path_wins_over_local_file() {
    let dir = TestDir::new();
    dir.add_file(CONFIG_FILE_NAME, "[validation]\nunknown_kinds = \"strict\"\n");
    dir.add_file("other.toml", "[batch]\nextensions = [\"fhir\"]\n");

    let config = Config::load(Some(&dir.path().join("other.toml")), dir.path()).unwrap();
    assert_eq!(config.validation.unknown_kinds, UnknownKindPolicy::Permissive);
    assert_eq!(config.batch.extensions, vec!["fhir"]);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = TestDir::new();
    let err = Config::load(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn invalid_policy_is_an_error() {
    let err = Config::parse("[validation]\nunknown_kinds = \"lenient\"\n", Path::new("c.toml"))
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.validation.unknown_kinds = UnknownKindPolicy::Strict;
    config.batch.exclude = vec!["drafts/**".to_string()];

    let text = config.to_toml().unwrap();
    assert_eq!(Config::parse(&text, Path::new("c.toml")).unwrap(), config);
}
