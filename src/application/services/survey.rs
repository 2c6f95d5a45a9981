//! Survey tree loading service
//!
//! Reads a JSON tree description and builds the immutable level tree.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{DomainError, LevelBuilder, LevelSpec, PieLevel};
use crate::infrastructure::traits::FileSystem;

/// Service for loading survey hierarchies.
pub struct SurveyService {
    fs: Arc<dyn FileSystem>,
    builder: LevelBuilder,
}

impl SurveyService {
    /// Create a new survey service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: &Settings) -> Self {
        Self {
            fs,
            builder: LevelBuilder::new(
                settings.navigation.geometry(),
                settings.default_color.clone(),
            ),
        }
    }

    /// Load and build the tree described by the JSON file at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<PieLevel> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::DataNotFound(path.to_path_buf()));
        }
        if !self.fs.is_file(path) {
            return Err(ApplicationError::NotAFile(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read tree description", path)?;
        debug!("load: {} bytes from {}", content.len(), path.display());

        let spec = LevelSpec::from_json(&content).map_err(|source| ApplicationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.build(&spec))
    }

    /// Build a tree from an already parsed description.
    pub fn build(&self, spec: &LevelSpec) -> PieLevel {
        self.builder.build(spec)
    }

    /// Pick the data file: explicit argument first, then settings.
    pub fn resolve_data_file<'a>(
        explicit: Option<&'a Path>,
        settings: &'a Settings,
    ) -> ApplicationResult<&'a Path> {
        explicit
            .or(settings.data_file.as_deref())
            .ok_or(ApplicationError::NoDataFile)
    }

    /// Select a level by a slash-separated path of names below the root.
    ///
    /// `None` or an empty path selects the root itself.
    pub fn select<'a>(root: &'a PieLevel, path: Option<&str>) -> ApplicationResult<&'a PieLevel> {
        let names: Vec<&str> = path
            .unwrap_or_default()
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        root.find(&names)
            .ok_or_else(|| DomainError::LevelNotFound(names.join("/")).into())
    }
}
