//! Integration tests for configuration loading and saving using temp dirs

use demostat::config::Config;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_load_without_config_file() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");

    let (config, warnings) = Config::load(temp_dir.path(), None).expect("load should succeed");

    assert_eq!(config.results, 1000);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.seed.is_none());
    assert!(warnings.is_empty());
}

#[test]
fn test_load_explicit_path() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "results = 42\nseed = \"fixed\"\n").expect("failed to write config");

    let (config, warnings) = Config::load(temp_dir.path(), Some(&config_path)).expect("load should succeed");

    assert_eq!(config.results, 42);
    assert_eq!(config.seed.as_deref(), Some("fixed"));
    assert!(warnings.is_empty());
}

#[test]
fn test_load_searches_candidates() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(temp_dir.path().join("demostat.toml"), "results = 7\n").expect("failed to write config");

    let (config, _) = Config::load(temp_dir.path(), None).expect("load should succeed");

    assert_eq!(config.results, 7);
}

#[test]
fn test_load_yaml_candidate() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(temp_dir.path().join("demostat.yaml"), "results: 12\nnationalities: [us, gb]\n")
        .expect("failed to write config");

    let (config, _) = Config::load(temp_dir.path(), None).expect("load should succeed");

    assert_eq!(config.results, 12);
    assert_eq!(config.nationalities, vec!["us".to_string(), "gb".to_string()]);
}

#[test]
fn test_load_explicit_path_missing() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing: PathBuf = temp_dir.path().join("nope.toml");

    assert!(Config::load(temp_dir.path(), Some(&missing)).is_err());
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config_path = temp_dir.path().join("demostat.toml");

    let mut config = Config::default();
    config.results = 500;
    config.seed = Some("repeatable".to_string());
    config.save(&config_path).expect("save should succeed");

    let (loaded, warnings) = Config::load(temp_dir.path(), None).expect("load should succeed");

    assert_eq!(loaded.results, 500);
    assert_eq!(loaded.seed.as_deref(), Some("repeatable"));
    assert!(warnings.is_empty());
}

#[test]
fn test_load_reports_warnings() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(
        temp_dir.path().join("demostat.toml"),
        "results = 9999\nnationalities = [\"usa\"]\n",
    )
    .expect("failed to write config");

    let (config, warnings) = Config::load(temp_dir.path(), None).expect("load should succeed");

    assert_eq!(config.results, 9999);
    assert_eq!(warnings.len(), 2);
}
