//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ChartService, SurveyService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub survey: SurveyService,
    pub charts: ChartService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let survey = SurveyService::new(fs, &settings);
        let charts = ChartService::new(&settings);

        Self {
            settings,
            survey,
            charts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::MemoryFileSystem;
    use std::path::Path;

    #[test]
    fn given_injected_filesystem_when_loading_then_survey_reads_from_it() {
        let fs = MemoryFileSystem::new().with_file("/mem/survey.json", r#"{"name": "root"}"#);
        let container = ServiceContainer::with_deps(Settings::default(), Arc::new(fs));

        let root = container.survey.load(Path::new("/mem/survey.json")).unwrap();

        assert_eq!(root.name(), "root");
        assert_eq!(container.settings.default_color, "red");
    }
}
