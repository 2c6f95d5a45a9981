//! Integration tests for Settings loading with layered merge semantics.
//!
//! Merge Semantics:
//! - Defaults → Global → Local: a given key or section REPLACES the lower layer
//! - Any → Env vars: REPLACE (explicit user override)
//!
//! Note: These tests pass explicit config files from temp directories and
//! do not touch environment variables.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use surveypie::config::{local_config_path, Settings};

#[test]
fn given_explicit_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("surveypie.toml");
    fs::write(
        &path,
        r#"
default_color = "navy"

[charts]
score_max = 5.0
sunburst_placeholder_value = 1.0
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.default_color, "navy");
    assert_eq!(settings.charts.score_max, 5.0);
    assert_eq!(settings.charts.sunburst_placeholder_value, 1.0);
    // unspecified keys of a given section take their defaults
    assert_eq!(settings.charts.full_angle_value, 100.0);
}

#[test]
fn given_navigation_section_when_load_then_geometry_follows() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("surveypie.toml");
    fs::write(
        &path,
        r#"
[navigation]
center_element_radius = { max = 30.0, min = 12.0 }
inside_ring_radius = 4.0
use_value_for_angle = false
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).unwrap();
    let geometry = settings.navigation.geometry();

    // Assert
    assert_eq!(geometry.center_max, 30.0);
    assert_eq!(geometry.center_min, 12.0);
    assert_eq!(geometry.inside, 4.0);
    assert_eq!(geometry.outside, 15.0);
    assert!(!settings.navigation.use_value_for_angle);
}

#[test]
fn given_data_file_with_env_var_when_load_then_path_is_expanded() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("surveypie.toml");
    fs::write(&path, "data_file = \"$HOME/surveys/root.json\"\n").unwrap();
    let home = std::env::var("HOME").expect("HOME should be set");

    // Act
    let settings = Settings::load(Some(&path)).unwrap();

    // Assert
    assert_eq!(
        settings.data_file,
        Some(PathBuf::from(format!("{home}/surveys/root.json")))
    );
}

#[test]
fn given_missing_explicit_config_when_load_then_errors() {
    let dir = TempDir::new().unwrap();

    let result = Settings::load(Some(&dir.path().join("absent.toml")));

    assert!(result.is_err());
}

#[test]
fn given_invalid_toml_when_load_then_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "default_color = [").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_through_load() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let original = Settings {
        default_color: "teal".to_string(),
        ..Settings::default()
    };
    let path = dir.path().join("surveypie.toml");
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    // Act
    let loaded = Settings::load(Some(&path)).unwrap();

    // Assert
    assert_eq!(loaded, original);
}

#[test]
fn given_directory_when_asking_local_path_then_uses_dot_file() {
    let path = local_config_path(std::path::Path::new("/work"));
    assert_eq!(path, PathBuf::from("/work/.surveypie.toml"));
}
