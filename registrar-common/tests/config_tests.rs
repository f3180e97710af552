//! Tests for config file loading
//!
//! - An explicit config file must exist and parse
//! - Partial files fill only the keys they name

use registrar_common::config::{
    load_toml_config, ConfigOverrides, ServerConfig, TomlConfig, DEFAULT_HOST,
};
use registrar_common::Error;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_explicit_config_file_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
host = "127.0.0.1"
port = 4100
database_path = "/var/lib/registrar/test.db"
"#,
    )
    .unwrap();

    let config = load_toml_config(Some(&path)).unwrap();

    assert_eq!(
        config,
        Some(TomlConfig {
            host: Some("127.0.0.1".to_string()),
            port: Some(4100),
            database_path: Some(PathBuf::from("/var/lib/registrar/test.db")),
        })
    );
}

#[test]
fn test_partial_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 5000\n").unwrap();

    let file = load_toml_config(Some(&path)).unwrap();
    let config = ServerConfig::resolve(ConfigOverrides::default(), file);

    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, 5000);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_toml_config(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn test_malformed_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();

    let err = load_toml_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}
