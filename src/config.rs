//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/surveypie/surveypie.toml`
//! 3. Local config: `./.surveypie.toml` (or an explicit `--config` file)
//! 4. Environment variables: `SURVEYPIE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::RingGeometry;

/// Radius pair of the center element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CenterRadius {
    pub max: f64,
    pub min: f64,
}

/// Navigation pie ring dimensions (percent of the chart).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationSettings {
    pub center_element_radius: CenterRadius,
    pub gap_to_outside_ring_radius: f64,
    pub outside_ring_radius: f64,
    pub inside_ring_radius: f64,
    /// Slice angles follow level values; otherwise all slices are equal
    pub use_value_for_angle: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            center_element_radius: CenterRadius {
                max: 20.0,
                min: 10.0,
            },
            gap_to_outside_ring_radius: 5.0,
            outside_ring_radius: 15.0,
            inside_ring_radius: 5.0,
            use_value_for_angle: true,
        }
    }
}

impl NavigationSettings {
    pub fn geometry(&self) -> RingGeometry {
        RingGeometry {
            center_max: self.center_element_radius.max,
            center_min: self.center_element_radius.min,
            gap_to_outside: self.gap_to_outside_ring_radius,
            outside: self.outside_ring_radius,
            inside: self.inside_ring_radius,
        }
    }
}

/// Chart series settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    /// Slice value used when `use_value_for_angle` is off
    pub full_angle_value: f64,
    /// Value shown for zero-valued levels in the sunburst
    pub sunburst_placeholder_value: f64,
    /// Upper end of the answer scale
    pub score_max: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            full_angle_value: 100.0,
            sunburst_placeholder_value: 20.0,
            score_max: 100.0,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub default_color: Option<String>,
    pub navigation: Option<NavigationSettings>,
    pub charts: Option<ChartSettings>,
}

/// Unified configuration for surveypie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Tree description to load when no `--data` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Color of levels without a colored ancestor
    pub default_color: String,
    pub navigation: NavigationSettings,
    pub charts: ChartSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            default_color: "red".to_string(),
            navigation: NavigationSettings::default(),
            charts: ChartSettings::default(),
        }
    }
}

/// Get the XDG config directory for surveypie.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "surveypie").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("surveypie.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".surveypie.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            default_color: overlay
                .default_color
                .clone()
                .unwrap_or_else(|| self.default_color.clone()),
            navigation: overlay
                .navigation
                .clone()
                .unwrap_or_else(|| self.navigation.clone()),
            charts: overlay.charts.clone().unwrap_or_else(|| self.charts.clone()),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &self.data_file {
            self.data_file = Some(expand_path(path));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Explicit config file; defaults to `./.surveypie.toml` if present
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        match local {
            Some(path) => {
                // explicit file must exist
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                let path = local_config_path(Path::new("."));
                if path.exists() {
                    let raw = load_raw_settings(&path)?;
                    current = current.merge_with(&raw);
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply SURVEYPIE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SURVEYPIE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("default_color") {
            settings.default_color = val;
        }
        if let Ok(val) = config.get_float("navigation.center_element_radius.max") {
            settings.navigation.center_element_radius.max = val;
        }
        if let Ok(val) = config.get_float("navigation.center_element_radius.min") {
            settings.navigation.center_element_radius.min = val;
        }
        if let Ok(val) = config.get_bool("navigation.use_value_for_angle") {
            settings.navigation.use_value_for_angle = val;
        }
        if let Ok(val) = config.get_float("navigation.inside_ring_radius") {
            settings.navigation.inside_ring_radius = val;
        }
        if let Ok(val) = config.get_float("navigation.outside_ring_radius") {
            settings.navigation.outside_ring_radius = val;
        }
        if let Ok(val) = config.get_float("navigation.gap_to_outside_ring_radius") {
            settings.navigation.gap_to_outside_ring_radius = val;
        }
        if let Ok(val) = config.get_float("charts.full_angle_value") {
            settings.charts.full_angle_value = val;
        }
        if let Ok(val) = config.get_float("charts.sunburst_placeholder_value") {
            settings.charts.sunburst_placeholder_value = val;
        }
        if let Ok(val) = config.get_float("charts.score_max") {
            settings.charts.score_max = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# surveypie configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/surveypie/surveypie.toml
#   Local:  ./.surveypie.toml (or --config <file>)
#   Env:    SURVEYPIE_* environment variables, e.g. SURVEYPIE_CHARTS__SCORE_MAX=10
#
# Sections replace the whole section of lower layers.

# Tree description loaded when --data is not given
# data_file = "~/surveys/root.json"

# Color of levels without a colored ancestor
# default_color = "red"

[navigation]
# center_element_radius = { max = 20.0, min = 10.0 }
# gap_to_outside_ring_radius = 5.0
# outside_ring_radius = 15.0
# inside_ring_radius = 5.0
# use_value_for_angle = true

[charts]
# full_angle_value = 100.0
# sunburst_placeholder_value = 20.0
# score_max = 100.0
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
