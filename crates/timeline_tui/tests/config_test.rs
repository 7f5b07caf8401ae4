//! Tests for loading the front-end config from disk.

use std::io::Write;
use std::path::PathBuf;
use timeline_tui::{Cli, TuiConfig};

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = false").unwrap();
    writeln!(file, "log_file = \"play.log\"").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert!(!*config.ascending());
    assert_eq!(config.log_file(), &PathBuf::from("play.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = true").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        descending: true,
        log_file: Some(PathBuf::from("override.log")),
    };
    let config = cli.resolve_config().unwrap();

    assert!(!*config.ascending());
    assert_eq!(config.log_file(), &PathBuf::from("override.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
