//! Chart series builders
//!
//! Turns levels and datasets into plain, serializable series data. Rendering
//! (colors of axes, tooltips, layout of the page) is left to the consumer.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::{ChartSettings, Settings};
use crate::domain::{
    compute_average, five_number_summary, Dataset, Diagnostics, FiveNumberSummary, LevelValue,
    PieLevel, RingLayout, SunburstNode,
};

/// Legend entry of the series computed over all groups of a dataset.
const TOTAL_SERIES: &str = "total";
/// Legend entry of the per-child series of an interior level.
const AVERAGE_SERIES: &str = "average";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    /// Minimized ring showing only the selected child
    Inner,
    /// Expanded ring showing every child
    Outer,
}

/// One ring of the navigation pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSeries {
    pub name: String,
    pub kind: RingKind,
    pub data: Vec<LevelValue>,
    pub colors: Vec<String>,
    pub radius: [String; 2],
}

/// Equal-angle slice whose fill ratio encodes the child's average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Average divided by the score maximum; the slice is colored up to here
    pub fill: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub indicators: Vec<RadarIndicator>,
    pub series: Vec<RadarSeries>,
    pub warnings: Diagnostics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotSeries {
    pub name: String,
    /// One entry per category; `None` where no answers exist
    pub data: Vec<Option<FiveNumberSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotChart {
    pub categories: Vec<String>,
    pub series: Vec<BoxplotSeries>,
    pub warnings: Diagnostics,
}

/// Radar and boxplot over the same categories, sharing one legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedChart {
    pub legend: Vec<String>,
    pub radar: RadarChart,
    pub boxplot: BoxplotChart,
}

impl CombinedChart {
    /// Warnings of both charts, without duplicates.
    pub fn warnings(&self) -> Diagnostics {
        let mut warnings = self.radar.warnings.clone();
        warnings.extend(self.boxplot.warnings.clone());
        warnings
    }
}

/// Chart data for the detail view of a level.
pub type DetailsChart = CombinedChart;

/// Builds chart series from levels and datasets.
pub struct ChartService {
    charts: ChartSettings,
    use_value_for_angle: bool,
}

impl ChartService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            charts: settings.charts.clone(),
            use_value_for_angle: settings.navigation.use_value_for_angle,
        }
    }

    /// Children as pie slices; constant values when angles are not value based.
    pub fn pie_slices(&self, level: &PieLevel) -> Vec<LevelValue> {
        if self.use_value_for_angle {
            level.child_values()
        } else {
            level.child_values_constant(self.charts.full_angle_value)
        }
    }

    pub fn colors(&self, level: &PieLevel) -> Vec<String> {
        level.child_colors()
    }

    /// Ring of `level` in the navigation pie.
    ///
    /// With a selected child the level is drawn minimized, showing that child
    /// only; otherwise all children are drawn on the expanded ring.
    pub fn ring_series(&self, level: &PieLevel, selected: Option<&PieLevel>) -> RingSeries {
        match selected {
            Some(child) if !level.is_leaf() => RingSeries {
                name: level.name().to_string(),
                kind: RingKind::Inner,
                data: vec![LevelValue {
                    name: child.name().to_string(),
                    value: child.value(),
                }],
                colors: vec![child.color().to_string()],
                radius: RingLayout::as_percent(level.layout().radius_min),
            },
            _ => RingSeries {
                name: level.name().to_string(),
                kind: RingKind::Outer,
                data: self.pie_slices(level),
                colors: self.colors(level),
                radius: RingLayout::as_percent(level.layout().radius_max),
            },
        }
    }

    /// Sunburst data below `level`, `current_level + additional_depth` levels deep.
    ///
    /// The sum saturates; any depth past the leaves yields the full subtree.
    pub fn sunburst(
        &self,
        level: &PieLevel,
        current_level: usize,
        additional_depth: usize,
    ) -> Vec<SunburstNode> {
        let nodes = level.sunburst(current_level.saturating_add(additional_depth));
        self.with_placeholders(nodes)
    }

    fn with_placeholders(&self, nodes: Vec<SunburstNode>) -> Vec<SunburstNode> {
        nodes
            .into_iter()
            .map(|node| SunburstNode {
                value: if node.value == 0.0 {
                    self.charts.sunburst_placeholder_value
                } else {
                    node.value
                },
                children: self.with_placeholders(node.children),
                name: node.name,
            })
            .collect()
    }

    /// Equal slices per child, filled up to the child's (group) average.
    pub fn gradient(
        &self,
        level: &PieLevel,
        angle_value: f64,
        group: Option<&str>,
    ) -> Vec<GradientSlice> {
        level
            .children()
            .iter()
            .map(|child| GradientSlice {
                name: child.name().to_string(),
                value: angle_value,
                color: child.color().to_string(),
                fill: child.average(group) / self.charts.score_max,
            })
            .collect()
    }

    /// Per-question means, overall and per group.
    #[instrument(level = "debug", skip_all, fields(questions = dataset.question_tags().len()))]
    pub fn radar(&self, dataset: &Dataset) -> RadarChart {
        let mut warnings = Diagnostics::new();
        let questions = dataset.question_tags();

        let mut series = vec![RadarSeries {
            name: TOTAL_SERIES.to_string(),
            values: questions
                .iter()
                .map(|q| {
                    compute_average(&dataset.answers_reporting(Some(q.as_str()), None, &mut warnings))
                })
                .collect(),
        }];
        for group in dataset.group_tags() {
            series.push(RadarSeries {
                name: group.clone(),
                values: questions
                    .iter()
                    .map(|q| {
                        compute_average(&dataset.answers_reporting(
                            Some(q.as_str()),
                            Some(group.as_str()),
                            &mut warnings,
                        ))
                    })
                    .collect(),
            });
        }

        RadarChart {
            indicators: questions
                .iter()
                .map(|q| RadarIndicator {
                    name: q.clone(),
                    max: self.charts.score_max,
                    color: None,
                })
                .collect(),
            series,
            warnings,
        }
    }

    /// Per-question five-number summaries, overall and per group.
    #[instrument(level = "debug", skip_all, fields(questions = dataset.question_tags().len()))]
    pub fn boxplot(&self, dataset: &Dataset) -> BoxplotChart {
        let mut warnings = Diagnostics::new();
        let questions = dataset.question_tags();

        let mut series = vec![BoxplotSeries {
            name: TOTAL_SERIES.to_string(),
            data: questions
                .iter()
                .map(|q| {
                    summarize(&dataset.answers_reporting(Some(q.as_str()), None, &mut warnings))
                })
                .collect(),
        }];
        for group in dataset.group_tags() {
            series.push(BoxplotSeries {
                name: group.clone(),
                data: questions
                    .iter()
                    .map(|q| {
                        summarize(&dataset.answers_reporting(
                            Some(q.as_str()),
                            Some(group.as_str()),
                            &mut warnings,
                        ))
                    })
                    .collect(),
            });
        }

        BoxplotChart {
            categories: questions.to_vec(),
            series,
            warnings,
        }
    }

    /// Radar and boxplot of one dataset.
    pub fn combined(&self, dataset: &Dataset) -> CombinedChart {
        let legend = std::iter::once(TOTAL_SERIES.to_string())
            .chain(dataset.group_tags().iter().cloned())
            .collect();
        CombinedChart {
            legend,
            radar: self.radar(dataset),
            boxplot: self.boxplot(dataset),
        }
    }

    /// Detail charts of a level.
    ///
    /// Leaves are broken down by question tag. Interior levels are broken
    /// down by child, with one series per group of the level's dataset.
    #[instrument(level = "debug", skip_all, fields(level = level.name()))]
    pub fn details(&self, level: &PieLevel) -> DetailsChart {
        if level.is_leaf() {
            return self.combined(level.dataset());
        }

        let children = level.children();
        let groups = level.dataset().group_tags();
        let mut radar_warnings = Diagnostics::new();
        let mut boxplot_warnings = Diagnostics::new();

        let mut radar_series = vec![RadarSeries {
            name: AVERAGE_SERIES.to_string(),
            values: children
                .iter()
                .map(|c| {
                    compute_average(&c.dataset().answers_reporting(None, None, &mut radar_warnings))
                })
                .collect(),
        }];
        let mut boxplot_series = vec![BoxplotSeries {
            name: AVERAGE_SERIES.to_string(),
            data: children
                .iter()
                .map(|c| {
                    summarize(&c.dataset().answers_reporting(None, None, &mut boxplot_warnings))
                })
                .collect(),
        }];

        for group in groups {
            radar_series.push(RadarSeries {
                name: group.clone(),
                values: children
                    .iter()
                    .map(|c| {
                        compute_average(&c.dataset().answers_reporting(
                            None,
                            Some(group.as_str()),
                            &mut radar_warnings,
                        ))
                    })
                    .collect(),
            });
            boxplot_series.push(BoxplotSeries {
                name: group.clone(),
                data: children
                    .iter()
                    .map(|c| {
                        summarize(&c.dataset().answers_reporting(
                            None,
                            Some(group.as_str()),
                            &mut boxplot_warnings,
                        ))
                    })
                    .collect(),
            });
        }
        debug!(
            children = children.len(),
            groups = groups.len(),
            warnings = radar_warnings.len(),
            "details built"
        );

        CombinedChart {
            legend: std::iter::once(AVERAGE_SERIES.to_string())
                .chain(groups.iter().cloned())
                .collect(),
            radar: RadarChart {
                indicators: children
                    .iter()
                    .map(|c| RadarIndicator {
                        name: c.name().to_string(),
                        max: self.charts.score_max,
                        color: Some(c.color().to_string()),
                    })
                    .collect(),
                series: radar_series,
                warnings: radar_warnings,
            },
            boxplot: BoxplotChart {
                categories: level.child_names(),
                series: boxplot_series,
                warnings: boxplot_warnings,
            },
        }
    }
}

/// Summary of a possibly empty answer set.
fn summarize(answers: &[f64]) -> Option<FiveNumberSummary> {
    five_number_summary(answers).ok()
}
