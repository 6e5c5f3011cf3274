//! Unit tests for settings module.

use shelfboard::error::SettingsError;
use shelfboard::settings::Settings;
use shelfboard::{PillarStyle, Room};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.grid_size_mm, 100.0);
    assert_eq!(settings.default_room, Room::default());
    assert_eq!(settings.pillar_style, PillarStyle::RearSingle);
    assert_eq!(settings.toast_duration(), Duration::from_secs(3));
    assert_eq!(settings.corner_overshoot_mm, 300.0);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        grid_size_mm: 50.0,
        default_room: Room::new(3600.0),
        pillar_style: PillarStyle::CenterSingle,
        ..Settings::default()
    };

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Settings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_non_positive_grid_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"gridSizeMm": 0.0}"#).unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::InvalidGrid(g)) if g == 0.0));
}

#[test]
fn test_negative_overshoot_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"cornerOvershootMm": -300.0}"#).unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::InvalidOvershoot(o)) if o == -300.0));
}

#[test]
fn test_zero_overshoot_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"cornerOvershootMm": 0.0}"#).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap().corner_overshoot_mm, 0.0);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"theme": "dark", "cornerOvershootMm": 200.0}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.corner_overshoot_mm, 200.0);
    assert_eq!(settings.grid_size_mm, 100.0);
}
