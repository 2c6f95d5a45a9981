//! Integration tests for SurveyService loading and level selection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use surveypie::application::services::SurveyService;
use surveypie::application::ApplicationError;
use surveypie::config::Settings;
use surveypie::domain::DomainError;
use surveypie::infrastructure::traits::{MemoryFileSystem, RealFileSystem};

const FIXTURE: &str = include_str!("resources/survey.json");

fn memory_service(path: &str, content: &str) -> SurveyService {
    let fs = Arc::new(MemoryFileSystem::new().with_file(path, content));
    SurveyService::new(fs, &Settings::default())
}

// ============================================================
// load()
// ============================================================

#[test]
fn given_json_file_on_disk_when_loading_then_builds_tree() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("survey.json");
    std::fs::write(&path, FIXTURE).unwrap();
    let service = SurveyService::new(Arc::new(RealFileSystem), &Settings::default());

    // Act
    let root = service.load(&path).unwrap();

    // Assert
    assert_eq!(root.name(), "School");
    assert_eq!(root.children().len(), 3);
}

#[test]
fn given_memory_file_when_loading_then_builds_tree() {
    let service = memory_service("/data/survey.json", FIXTURE);

    let root = service.load(Path::new("/data/survey.json")).unwrap();

    assert_eq!(root.find(&["Climate"]).unwrap().value(), 60.0);
}

#[test]
fn given_missing_file_when_loading_then_data_not_found() {
    let service = memory_service("/data/survey.json", FIXTURE);

    let result = service.load(Path::new("/data/other.json"));

    assert!(matches!(result, Err(ApplicationError::DataNotFound(p)) if p == Path::new("/data/other.json")));
}

#[test]
fn given_directory_when_loading_then_not_a_file() {
    let temp = TempDir::new().unwrap();
    let service = SurveyService::new(Arc::new(RealFileSystem), &Settings::default());

    let result = service.load(temp.path());

    assert!(matches!(result, Err(ApplicationError::NotAFile(_))));
}

#[test]
fn given_invalid_json_when_loading_then_parse_error_names_path() {
    let service = memory_service("/data/broken.json", "{ \"name\": ");

    let err = service.load(Path::new("/data/broken.json")).unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { .. }));
    assert!(err.to_string().contains("/data/broken.json"));
}

#[test]
fn given_blank_level_name_when_loading_then_builds_tree() {
    let service = memory_service("/s.json", r#"{"name": " "}"#);

    let root = service.load(Path::new("/s.json")).unwrap();

    assert_eq!(root.name(), " ");
    assert_eq!(root.value(), 0.0);
}

// ============================================================
// resolve_data_file() / select()
// ============================================================

#[test]
fn given_explicit_path_when_resolving_then_wins_over_settings() {
    let settings = Settings {
        data_file: Some(PathBuf::from("/from/config.json")),
        ..Settings::default()
    };

    let explicit = SurveyService::resolve_data_file(Some(Path::new("/cli.json")), &settings);
    let fallback = SurveyService::resolve_data_file(None, &settings);

    assert_eq!(explicit.unwrap(), Path::new("/cli.json"));
    assert_eq!(fallback.unwrap(), Path::new("/from/config.json"));
}

#[test]
fn given_no_path_anywhere_when_resolving_then_no_data_file() {
    let settings = Settings::default();
    let result = SurveyService::resolve_data_file(None, &settings);
    assert!(matches!(result, Err(ApplicationError::NoDataFile)));
}

#[test]
fn given_slash_path_when_selecting_then_returns_nested_level() {
    let service = memory_service("/s.json", FIXTURE);
    let root = service.load(Path::new("/s.json")).unwrap();

    let planning = SurveyService::select(&root, Some("Teaching/Planning")).unwrap();
    let same_root = SurveyService::select(&root, None).unwrap();

    assert_eq!(planning.name(), "Planning");
    assert_eq!(same_root.name(), "School");
}

#[test]
fn given_unknown_path_when_selecting_then_level_not_found() {
    let service = memory_service("/s.json", FIXTURE);
    let root = service.load(Path::new("/s.json")).unwrap();

    let result = SurveyService::select(&root, Some("Teaching/Nope"));

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::LevelNotFound(p))) if p == "Teaching/Nope"
    ));
}
