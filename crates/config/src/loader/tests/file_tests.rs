//! Config file tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test JSON config file parsing and application.
//! - Test precedence between the file and environment variables.
//! - Test read and parse failures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use super::{cleared_env, env_lock};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::{ColorTheme, Curve};

/// Write a config file into `dir` and return its path.
pub fn create_test_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("coversheet.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_applied() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(
        temp_dir.path(),
        r#"{
            "reveal_delay_ms": 320,
            "transition_ms": 150,
            "curve": "ease_out",
            "theme": "dark"
        }"#,
    );

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.reveal_delay, Duration::from_millis(320));
        assert_eq!(config.dismiss_delay, Duration::from_millis(250));
        assert_eq!(config.transition_duration, Duration::from_millis(150));
        assert_eq!(config.curve, Curve::EaseOut);
        assert_eq!(config.theme, ColorTheme::Dark);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(temp_dir.path(), r#"{ "theme": "light" }"#);

    let mut env = cleared_env();
    env.retain(|(k, _)| *k != "COVERSHEET_THEME");
    env.push(("COVERSHEET_THEME", Some("monochrome")));

    temp_env::with_vars(env, || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_env()
            .unwrap()
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.theme, ColorTheme::Monochrome);
    });
}

#[test]
fn test_no_config_path_is_noop() {
    let config = ConfigLoader::new().from_file().unwrap().build().unwrap();
    assert_eq!(config.reveal_delay, Duration::from_millis(250));
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");
    let result = ConfigLoader::new().with_config_path(path.clone()).from_file();
    match result {
        Err(ConfigError::ConfigFileRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ConfigFileRead, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(temp_dir.path(), "{ reveal_delay_ms: ");
    assert!(matches!(
        ConfigLoader::new().with_config_path(path).from_file(),
        Err(ConfigError::ConfigFileParse { .. })
    ));
}

#[test]
fn test_unknown_key_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_config_file(temp_dir.path(), r#"{ "reveal_delay": 100 }"#);
    assert!(matches!(
        ConfigLoader::new().with_config_path(path).from_file(),
        Err(ConfigError::ConfigFileParse { .. })
    ));
}
