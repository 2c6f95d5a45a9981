//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw survey response, tagged by question and respondent group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Survey question / category identifier
    pub question_tag: String,
    /// Respondent sub-population
    pub group: String,
    /// Numeric score, usually within 0..=100 (not enforced)
    pub answer: f64,
}

impl AnswerRecord {
    pub fn new(question_tag: impl Into<String>, group: impl Into<String>, answer: f64) -> Self {
        Self {
            question_tag: question_tag.into(),
            group: group.into(),
            answer,
        }
    }
}

/// Answer of a record with the group key dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub question_tag: String,
    pub answer: f64,
}

/// Answer of a record with the question key dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAnswer {
    pub group: String,
    pub answer: f64,
}

/// `[min, Q1, median, Q3, max]` using the exclusive-hinge quartile rule.
///
/// Serializes as a plain five-element array, the shape boxplot renderers take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 5]")]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    pub fn to_array(self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

impl From<FiveNumberSummary> for [f64; 5] {
    fn from(summary: FiveNumberSummary) -> Self {
        summary.to_array()
    }
}

/// Tooltip text, largest value first.
impl fmt::Display for FiveNumberSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max: {}", self.max)?;
        writeln!(f, "Q3: {}", self.q3)?;
        writeln!(f, "median: {}", self.median)?;
        writeln!(f, "Q1: {}", self.q1)?;
        write!(f, "Min: {}", self.min)
    }
}
