//! Tests for the config module

use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "appId": "com.example.app",
  "appName": "Example",
  "webDir": "www",
  "plugins": {
    "SplashScreen": { "launchShowDuration": 0 },
    "PWAFirebaseMsg": {
      "apiKey": "a",
      "authDomain": "b",
      "databaseURL": "c",
      "projectId": "d",
      "storageBucket": "e",
      "messagingSenderId": "f",
      "appId": "g",
      "vapidKey": "h"
    }
  }
}"#;

#[test]
fn test_parse_capacitor_config() {
    let config = parse_config_str(SAMPLE, Path::new(CONFIG_FILE_NAME)).unwrap();

    assert_eq!(config.web_dir.as_deref(), Some("www"));
    assert_eq!(config.plugins.len(), 2);
    assert!(config.plugin(DEFAULT_PLUGIN_NAME).is_some());
}

#[test]
fn test_plugin_must_be_an_object() {
    let config = parse_config_str(
        r#"{ "webDir": "www", "plugins": { "PWAFirebaseMsg": null } }"#,
        Path::new(CONFIG_FILE_NAME),
    )
    .unwrap();

    assert!(config.plugin(DEFAULT_PLUGIN_NAME).is_none());
}

#[test]
fn test_missing_sections_default() {
    let config = parse_config_str("{}", Path::new(CONFIG_FILE_NAME)).unwrap();

    assert!(config.web_dir.is_none());
    assert!(config.plugins.is_empty());
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = parse_config_str("{ webDir: www }", Path::new("cap.json")).unwrap_err();

    assert_eq!(err.kind(), "config_parse");
    assert!(err.to_string().contains("cap.json"));
}

#[test]
fn test_load_missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = load(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();

    assert_eq!(err.kind(), "config_read");
}

#[test]
fn test_load_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, SAMPLE).unwrap();

    let config = load(&path).unwrap();

    assert_eq!(config.web_dir.as_deref(), Some("www"));
}

#[test]
fn test_plugin_block_warns_only_on_near_miss_keys() {
    let config = parse_config_str(
        r#"{ "plugins": { "PWAFirebaseMsg": { "apiKey": "a", "databaseUrl": "c", "measurementId": "G-1", "debug": true } } }"#,
        Path::new(CONFIG_FILE_NAME),
    )
    .unwrap();
    let block = config.plugin(DEFAULT_PLUGIN_NAME).unwrap();

    let (raw, warnings) = parse_plugin_block(block, Path::new(CONFIG_FILE_NAME));

    assert_eq!(
        raw.keys().collect::<Vec<_>>(),
        vec!["apiKey", "databaseUrl", "measurementId", "debug"]
    );
    assert!(raw.missing_keys().unwrap().contains(&"databaseURL"));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "databaseUrl");
    assert_eq!(warnings[0].suggestion, "databaseURL");
    assert!(warnings[0].to_string().contains("did you mean 'databaseURL'"));
}

#[test]
fn test_env_overrides() {
    let overrides = env_overrides_from(|key| match key {
        ENV_CONFIG => Some("/proj/capacitor.config.json".to_string()),
        ENV_PROJECT_ROOT => Some("/proj".to_string()),
        ENV_VERBOSITY => Some("Verbose".to_string()),
        _ => None,
    });

    assert_eq!(
        overrides.config.as_deref(),
        Some(Path::new("/proj/capacitor.config.json"))
    );
    assert_eq!(overrides.project_root.as_deref(), Some(Path::new("/proj")));
    assert_eq!(overrides.verbosity, Some(Verbosity::Verbose));
    assert!(overrides.warnings.is_empty());
}

#[test]
fn test_env_overrides_ignore_empty_and_invalid_values() {
    let overrides = env_overrides_from(|key| match key {
        ENV_CONFIG => Some("  ".to_string()),
        ENV_VERBOSITY => Some("loud".to_string()),
        _ => None,
    });

    assert_eq!(overrides.config, None);
    assert_eq!(overrides.verbosity, None);
    assert_eq!(overrides.warnings.len(), 1);
    assert!(overrides.warnings[0].contains(ENV_VERBOSITY));
}

#[test]
fn test_verbosity_serde() {
    let v: Verbosity = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(v, Verbosity::Debug);
    assert_eq!(Verbosity::default(), Verbosity::Normal);
}
