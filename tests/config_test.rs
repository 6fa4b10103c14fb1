//! Tests for configuration loading.

use std::io::Write;
use std::time::Duration;
use unbeatable_tictactoe::console::Keymap;
use unbeatable_tictactoe::{AppConfig, GameMode};

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(config.computer_delay(), Duration::from_millis(500));
    assert_eq!(*config.default_mode(), None);
    assert_eq!(*config.keymap(), Keymap::RowMajor);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_load_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
computer_delay_ms = 0
default_mode = "single"
keymap = "numpad"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.computer_delay(), Duration::ZERO);
    assert_eq!(*config.default_mode(), Some(GameMode::SinglePlayer));
    assert_eq!(*config.keymap(), Keymap::Numpad);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_mode = \"three-player\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides() {
    let config = AppConfig::default()
        .with_computer_delay_ms(25)
        .with_default_mode(GameMode::TwoPlayer)
        .with_keymap(Keymap::Numpad);
    assert_eq!(config.computer_delay(), Duration::from_millis(25));
    assert_eq!(*config.default_mode(), Some(GameMode::TwoPlayer));
    assert_eq!(*config.keymap(), Keymap::Numpad);
}
