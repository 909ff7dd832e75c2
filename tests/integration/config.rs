//! Integration tests for loading tokenizer configuration from disk

use std::fs;
use strlist::{ConfigError, TokenizerConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hosts.ron");
    fs::write(&path, "(\n    ignore: \"=\",\n    dedup: true,\n)\n").unwrap();

    let config = TokenizerConfig::load(&path).unwrap();
    assert_eq!(config.parse("a=1 b=2 a=1"), vec!["a=1", "b=2"]);
}

#[test]
fn test_saved_config_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("opts.ron");
    let config = TokenizerConfig {
        ignore: " ".to_string(),
        dedup: false,
    };
    fs::write(&path, config.to_ron().unwrap()).unwrap();

    let loaded = TokenizerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.parse("first name;last name"), vec!["first name", "last name"]);
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.ron");
    fs::write(&path, r#"(ignore: "ab")"#).unwrap();

    let err = TokenizerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidIgnore(_)));
    assert_eq!(
        err.to_string(),
        "Invalid ignore specification: Unknown delimiter: 'a'"
    );
}
