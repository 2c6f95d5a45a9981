//! Non-fatal diagnostics raised while querying datasets.

use std::fmt;

use serde::Serialize;

/// A filter combination matched no records.
///
/// Expected whenever a tag is absent from a subgroup; callers averaging
/// the empty result get `0` by the empty-average rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingTagWarning {
    pub question_tag: Option<String>,
    pub group: Option<String>,
}

impl fmt::Display for MissingTagWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no answers for question {} in group {}",
            self.question_tag.as_deref().unwrap_or("*"),
            self.group.as_deref().unwrap_or("*")
        )
    }
}

/// Accumulates warnings so headless callers can inspect them after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    warnings: Vec<MissingTagWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: MissingTagWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub fn warnings(&self) -> &[MissingTagWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        for warning in other.warnings {
            self.push(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_warning_when_pushing_then_kept_once() {
        let warning = MissingTagWarning {
            question_tag: Some("Q9".into()),
            group: None,
        };
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(warning.clone());
        diagnostics.push(warning);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn given_unfiltered_dimension_when_displaying_then_uses_wildcard() {
        let warning = MissingTagWarning {
            question_tag: Some("Q1".into()),
            group: None,
        };
        assert_eq!(warning.to_string(), "no answers for question Q1 in group *");
    }
}
