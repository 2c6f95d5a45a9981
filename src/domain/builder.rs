//! Tree builder turning a hierarchical description into [`PieLevel`]s.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::dataset::Dataset;
use crate::domain::entities::AnswerRecord;
use crate::domain::layout::{RingGeometry, RingLayout};
use crate::domain::level::{LevelSource, PieLevel};

/// Description of one level as supplied by the tree source (e.g. a JSON file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub children: Vec<LevelSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_data: Option<Vec<AnswerRecord>>,
}

impl LevelSpec {
    /// Parse a JSON tree description.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Constructs immutable level trees in one recursive pass.
pub struct LevelBuilder {
    geometry: RingGeometry,
    default_color: String,
}

impl Default for LevelBuilder {
    fn default() -> Self {
        Self::new(RingGeometry::default(), "red")
    }
}

impl LevelBuilder {
    pub fn new(geometry: RingGeometry, default_color: impl Into<String>) -> Self {
        Self {
            geometry,
            default_color: default_color.into(),
        }
    }

    /// Build the whole tree rooted at `spec`.
    ///
    /// Every description yields a tree; names are taken as given.
    #[instrument(level = "debug", skip(self, spec), fields(root = %spec.name))]
    pub fn build(&self, spec: &LevelSpec) -> PieLevel {
        let level = self.build_level(spec, 0.0, &self.default_color);
        debug!(
            depth = level.depth(),
            records = level.dataset().len(),
            "tree built"
        );
        level
    }

    fn build_level(
        &self,
        spec: &LevelSpec,
        parent_min_radius: f64,
        inherited_color: &str,
    ) -> PieLevel {
        let color = spec.color.as_deref().unwrap_or(inherited_color);
        let layout = RingLayout::new(parent_min_radius, &self.geometry);
        let child_radius = layout.child_parameter(&self.geometry);

        let children = spec
            .children
            .iter()
            .map(|child| self.build_level(child, child_radius, color))
            .collect();

        let source = match &spec.source_data {
            Some(records) => LevelSource::Explicit(Dataset::new(records.clone())),
            None => LevelSource::Derived,
        };

        PieLevel::new(&spec.name, color, layout, children, source)
    }
}
