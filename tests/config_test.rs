//! Integration tests for Settings layered loading from a global config file.
//!
//! Env var overrides live in config_env_test.rs: they mutate process state and
//! would race with these tests inside one test binary.

use std::fs;

use tempfile::TempDir;

use inorder::application::ApplicationError;
use inorder::config::{OutputFormat, Settings};

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("inorder.toml");

    let settings = Settings::load_from(Some(&missing)).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.capacity, None);
    assert_eq!(settings.format, OutputFormat::Plain);
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inorder.toml");
    fs::write(
        &path,
        r#"
capacity = 100
format = "json"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&path)).expect("load settings");

    assert_eq!(settings.capacity, Some(100));
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(!settings.verify, "unspecified keys keep their default");
}

#[test]
fn given_malformed_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inorder.toml");
    fs::write(&path, "capacity = \"lots\"\n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("inorder.toml"));
}

#[test]
fn given_settings_when_serialized_then_loadable_again() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inorder.toml");
    let original = Settings {
        capacity: Some(42),
        verify: true,
        format: OutputFormat::Json,
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_from(Some(&path)).expect("load settings");

    assert_eq!(loaded, original);
}
