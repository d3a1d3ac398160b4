//! Configuration Loader Tests

use std::time::Duration;
use syncgate_domain::error::Error;
use syncgate_infrastructure::config::loader::{ConfigBuilder, ConfigLoader, validate_app_config};
use syncgate_infrastructure::config::{AccountConfig, SyncConfig};
use syncgate_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SYNC_STORES};
use tempfile::TempDir;

/// Loader isolated from the process environment and default file locations
fn isolated_loader(dir: &TempDir, prefix: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix(prefix)
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("syncgate.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let config = isolated_loader(&dir, "SYNCGATE_TEST_DEFAULTS").load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.sync.enabled);
    assert_eq!(config.sync.stores, DEFAULT_SYNC_STORES);
    assert!(config.sync.store_timeout().is_none());
    assert!(!config.account.is_signed_in());
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"

[sync]
stores = ["history", "bookmarks", "logins"]
store_timeout_secs = 30

[account]
key_id = "kid"
access_token = "token"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYNCGATE_TEST_FILE")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.sync.stores, vec!["history", "bookmarks", "logins"]);
    assert_eq!(config.sync.store_timeout(), Some(Duration::from_secs(30)));
    assert!(config.account.is_signed_in());
    assert_eq!(config.account.credential().unwrap().key_id, "kid");
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sync]\nenabled = true\n");

    // SAFETY: the prefix is unique to this test
    unsafe {
        std::env::set_var("SYNCGATE_TEST_ENV_SYNC__ENABLED", "false");
        std::env::set_var("SYNCGATE_TEST_ENV_LOGGING__LEVEL", "warn");
    }

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYNCGATE_TEST_ENV")
        .load()
        .unwrap();

    assert!(!config.sync.enabled);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sync]\nstores = 42\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYNCGATE_TEST_INVALID")
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_duplicate_store_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sync]\nstores = [\"history\", \"history\"]\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYNCGATE_TEST_DUPLICATE")
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_validation_rules() {
    let valid = ConfigBuilder::new().build();
    assert!(validate_app_config(&valid).is_ok());

    let empty_name = ConfigBuilder::new().with_stores(["history", " "]).build();
    assert!(validate_app_config(&empty_name).is_err());

    let zero_timeout = ConfigBuilder::new()
        .with_sync(SyncConfig {
            store_timeout_secs: Some(0),
            ..SyncConfig::default()
        })
        .build();
    assert!(validate_app_config(&zero_timeout).is_err());

    let mut bad_level = ConfigBuilder::new().build();
    bad_level.logging.level = "loud".to_string();
    assert!(validate_app_config(&bad_level).is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let original = ConfigBuilder::new()
        .with_stores(["history", "tabs"])
        .with_account(AccountConfig {
            key_id: "kid".to_string(),
            access_token: "token".to_string(),
            ..AccountConfig::default()
        })
        .build();

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYNCGATE_TEST_ROUNDTRIP");
    loader.save_to_file(&original, &path).unwrap();

    assert_eq!(loader.load().unwrap(), original);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_account_debug_hides_token() {
    let account = AccountConfig {
        access_token: "secret-token".to_string(),
        ..AccountConfig::default()
    };
    assert!(!format!("{account:?}").contains("secret-token"));
}
