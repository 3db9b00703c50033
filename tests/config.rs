//! Tests for config loading, saving, and gate construction from config.

use chanlog::{ChannelRegistry, ChannelSettings, Config, Error, LogGate, Severity};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.channels.default_state);
    assert_eq!(config.parse_level(), Severity::Info);
}

#[test]
fn parses_channels_section() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chanlog.toml");
    fs::write(
        &path,
        r#"
[general]
enabled = true
level = "warning"

[channels]
default_state = false

[channels.state]
AI = false
Physics = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.enabled());
    assert_eq!(config.parse_level(), Severity::Warning);
    assert!(!config.channels.default_state);
    assert_eq!(config.channels.state.get("AI"), Some(&false));
    assert_eq!(config.channels.state.get("Physics"), Some(&true));
}

#[test]
fn invalid_toml_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.toml");
    fs::write(&path, "[channels\ndefault_state = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn unknown_level_falls_back_to_info() {
    let mut config = Config::default();
    config.general.level = "loud".to_string();
    assert_eq!(config.parse_level(), Severity::Info);
}

#[test]
fn save_and_reload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("chanlog.toml");

    let mut config = Config::default();
    config.general.enabled = Some(false);
    config.channels = ChannelSettings::default()
        .channel("AI", false)
        .channel("Audio", true);
    config
        .console
        .palette
        .insert("error".to_string(), "#ff0000".to_string());
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn settings_capture_registry() {
    let mut registry = ChannelRegistry::new(false);
    registry.set_enabled("AI", true);
    registry.is_enabled("Physics");

    let settings = ChannelSettings::from_registry(&registry);
    assert!(!settings.default_state);
    assert_eq!(settings.state.len(), 2);
    assert_eq!(settings.state.get("Physics"), Some(&false));
}

#[test]
fn gate_from_config_is_seeded() {
    let mut config = Config::default();
    config.general.enabled = Some(true);
    config.channels = ChannelSettings::default().channel("AI", false);

    let mut gate = LogGate::from_config(&config);
    assert!(gate.enabled());
    assert_eq!(gate.channels().get("AI"), Some(false));
    assert!(!gate.should_emit(Severity::Info, Some("AI")));
}

#[test]
fn gate_from_config_without_seed_starts_empty() {
    let mut config = Config::default();
    config.general.enabled = Some(true);
    config.channels = ChannelSettings {
        default_state: false,
        ..ChannelSettings::default().channel("AI", true)
    };

    let mut gate = LogGate::from_config_seeded(&config, false);
    assert!(gate.channels().is_empty());
    assert!(!gate.default_channel_state());
    assert!(!gate.should_emit(Severity::Info, Some("AI")));
}

#[test]
fn palette_skips_unknown_severities() {
    let mut config = Config::default();
    config
        .console
        .palette
        .insert("warning".to_string(), "#010203".to_string());
    config
        .console
        .palette
        .insert("debug".to_string(), "#ffffff".to_string());

    let palette = config.palette();
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].0, Severity::Warning);
    assert_eq!(palette[0].1, chanlog::fmt::Color::new(1, 2, 3));
}

#[test]
fn expand_path_resolves_tilde() {
    let expanded = Config::expand_path("~/chanlog.toml");
    assert!(!expanded.to_string_lossy().starts_with('~'));
}
