//! Settings and configuration tests

use std::time::Duration;

use codedeploy_push::app::run::load_settings;
use codedeploy_push::errors::ErrorKind;
use codedeploy_push::filesys::file::File;
use codedeploy_push::logs::LogLevel;
use codedeploy_push::models::config::Environment;
use codedeploy_push::storage::settings::Settings;

const SETTINGS_JSON: &str = r#"{
    "app_name": "fakeApp",
    "bucket": "fakeApp",
    "subdir": "fakeDirectory",
    "file_name": "file.zip",
    "source": "dist",
    "deploy_config": "CodeDeployDefault.OneAtATime",
    "default_description": "No description set",
    "deployment_groups": { "production": "web-prod" },
    "log_level": "debug",
    "command_timeout_secs": 600
}"#;

fn write_settings(contents: &str) -> (tempfile::TempDir, File) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("codedeploy.json");
    std::fs::write(&path, contents).unwrap();
    (dir, File::new(path))
}

#[test]
fn test_load_settings_file() {
    let (_dir, file) = write_settings(SETTINGS_JSON);
    let settings = tokio_test::block_on(load_settings(&file)).unwrap();

    assert_eq!(settings.app_name.as_deref(), Some("fakeApp"));
    assert_eq!(settings.log_level, LogLevel::Debug);
    assert_eq!(settings.command_timeout(), Some(Duration::from_secs(600)));
    assert_eq!(settings.deployment_groups.production, "web-prod");
    assert_eq!(settings.deployment_groups.development, "development");
}

#[test]
fn test_missing_settings_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = File::new(dir.path().join("absent.json"));

    let settings = tokio_test::block_on(load_settings(&file)).unwrap();
    let err = settings
        .to_configuration(Environment::Development, None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_malformed_settings_file() {
    let (_dir, file) = write_settings("{ app_name: ");
    let err = tokio_test::block_on(load_settings(&file)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_configuration_from_settings() {
    let settings: Settings = serde_json::from_str(SETTINGS_JSON).unwrap();

    let config = settings
        .to_configuration(Environment::Production, None)
        .unwrap();
    assert_eq!(config.deployment_group(), "web-prod");
    assert_eq!(config.default_description(), "No description set");

    let config = settings
        .to_configuration(Environment::Development, Some("Hotfix"))
        .unwrap();
    assert_eq!(config.deployment_group(), "development");
    assert_eq!(config.default_description(), "Hotfix");
}

#[test]
fn test_description_required_somewhere() {
    let mut settings: Settings = serde_json::from_str(SETTINGS_JSON).unwrap();
    settings.default_description = None;

    let err = settings
        .to_configuration(Environment::Development, None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("default_description"));

    assert!(settings
        .to_configuration(Environment::Development, Some("From the command line"))
        .is_ok());
}
