//! Config parsing, validation and loading.

use copy_cli::source::{Encoding, MAX_CONTENT_SIZE};
use copy_cli::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.input.max_file_size, MAX_CONTENT_SIZE);
    assert_eq!(
        config.input.encodings,
        vec![
            Encoding::Utf8,
            Encoding::Utf8Bom,
            Encoding::Latin1,
            Encoding::Windows1252
        ]
    );
    assert_eq!(config.binary.sample_size, 1000);
    assert_eq!(config.binary.min_printable_ratio, 0.7);
    assert_eq!(config.binary.preview_bytes, 100);
    assert_eq!(config.verify.settle_delay_ms, 100);
    assert_eq!(config.verify.sentinel, "clipboard_test");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[binary]
min_printable_ratio = 0.9
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.binary.min_printable_ratio, 0.9);
    assert_eq!(config.binary.sample_size, 1000);
    assert_eq!(config.input.max_file_size, MAX_CONTENT_SIZE);
}

#[test]
fn encodings_accept_aliases() {
    let toml_str = r#"
[input]
encodings = ["utf8", "cp1252"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.input.encodings,
        vec![Encoding::Utf8, Encoding::Windows1252]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn ladder_without_single_byte_fallback_is_invalid() {
    let mut config = Config::default();
    config.input.encodings = vec![Encoding::Utf8];
    let err = config.validate().unwrap_err();
    assert!(err.contains("input.encodings"));
}

#[test]
fn out_of_range_ratio_is_invalid() {
    let mut config = Config::default();
    config.binary.min_printable_ratio = 1.5;
    assert!(config.validate().unwrap_err().contains("min_printable_ratio"));
}

#[test]
fn blank_sentinel_is_invalid() {
    let mut config = Config::default();
    config.verify.sentinel = "  ".to_string();
    assert!(config.validate().unwrap_err().contains("sentinel"));
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[verify]\nsettle_delay_ms = 250\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.verify.settle_delay_ms, 250);
}

#[test]
fn load_from_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[binary]\nsample_size = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("sample_size"));
}

#[test]
fn load_from_rejects_unknown_encoding() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[input]\nencodings = [\"ebcdic\"]\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}
