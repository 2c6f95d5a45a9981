//! Answer storage and per-question / per-group statistics for one subtree.

use itertools::Itertools;
use tracing::debug;

use crate::domain::diagnostics::{Diagnostics, MissingTagWarning};
use crate::domain::entities::{AnswerRecord, FiveNumberSummary, GroupAnswer, QuestionAnswer};
use crate::domain::error::DomainResult;
use crate::domain::stats;

/// Immutable collection of answer records.
///
/// Question and group tags are derived once from the records, in first-seen
/// order. Changing the records means building a new `Dataset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<AnswerRecord>,
    question_tags: Vec<String>,
    group_tags: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<AnswerRecord>) -> Self {
        let question_tags = records
            .iter()
            .map(|r| r.question_tag.clone())
            .unique()
            .collect();
        let group_tags = records.iter().map(|r| r.group.clone()).unique().collect();
        Self {
            records,
            question_tags,
            group_tags,
        }
    }

    /// Concatenate the records of several datasets, in the given order.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Dataset>) -> Self {
        let records = parts
            .into_iter()
            .flat_map(|d| d.records.iter().cloned())
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn question_tags(&self) -> &[String] {
        &self.question_tags
    }

    pub fn group_tags(&self) -> &[String] {
        &self.group_tags
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All answers of one group, group key dropped.
    pub fn filter_by_group(&self, group: &str) -> Vec<QuestionAnswer> {
        self.records
            .iter()
            .filter(|r| r.group == group)
            .map(|r| QuestionAnswer {
                question_tag: r.question_tag.clone(),
                answer: r.answer,
            })
            .collect()
    }

    /// All answers to one question, question key dropped.
    pub fn filter_by_question(&self, question_tag: &str) -> Vec<GroupAnswer> {
        self.records
            .iter()
            .filter(|r| r.question_tag == question_tag)
            .map(|r| GroupAnswer {
                group: r.group.clone(),
                answer: r.answer,
            })
            .collect()
    }

    /// Answer values matching both optional filters, in record order.
    ///
    /// `None` leaves that dimension unconstrained. An empty result is
    /// logged, not treated as an error.
    pub fn answers(&self, question_tag: Option<&str>, group: Option<&str>) -> Vec<f64> {
        let answers = self.select(question_tag, group);
        if answers.is_empty() {
            debug!(?question_tag, ?group, "no answers match filter");
        }
        answers
    }

    /// Like [`Dataset::answers`], recording a [`MissingTagWarning`] on empty results.
    pub fn answers_reporting(
        &self,
        question_tag: Option<&str>,
        group: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> Vec<f64> {
        let answers = self.answers(question_tag, group);
        if answers.is_empty() {
            diagnostics.push(MissingTagWarning {
                question_tag: question_tag.map(str::to_string),
                group: group.map(str::to_string),
            });
        }
        answers
    }

    fn select(&self, question_tag: Option<&str>, group: Option<&str>) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| question_tag.map_or(true, |q| r.question_tag == q))
            .filter(|r| group.map_or(true, |g| r.group == g))
            .map(|r| r.answer)
            .collect()
    }

    /// Mean of the matching answers; `0.0` when nothing matches.
    pub fn average(&self, question_tag: Option<&str>, group: Option<&str>) -> f64 {
        stats::compute_average(&self.answers(question_tag, group))
    }

    /// Five-number summary of the matching answers.
    pub fn summary(
        &self,
        question_tag: Option<&str>,
        group: Option<&str>,
    ) -> DomainResult<FiveNumberSummary> {
        stats::five_number_summary(&self.answers(question_tag, group))
    }

    /// Summary and mean for every question tag, overall and crossed with every group.
    pub fn question_summaries(&self) -> Vec<QuestionSummary> {
        self.question_tags
            .iter()
            .map(|question| QuestionSummary {
                question_tag: question.clone(),
                total: TagStatistics::from_answers(&self.answers(Some(question), None)),
                by_group: self
                    .group_tags
                    .iter()
                    .map(|group| {
                        (
                            group.clone(),
                            TagStatistics::from_answers(&self.answers(Some(question), Some(group))),
                        )
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Count, mean and (for non-empty input) five-number summary of one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStatistics {
    pub count: usize,
    pub mean: f64,
    pub summary: Option<FiveNumberSummary>,
}

impl TagStatistics {
    pub fn from_answers(answers: &[f64]) -> Self {
        Self {
            count: answers.len(),
            mean: stats::compute_average(answers),
            summary: stats::five_number_summary(answers).ok(),
        }
    }
}

/// Statistics of one question tag.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSummary {
    pub question_tag: String,
    pub total: TagStatistics,
    /// One entry per group tag, in group-tag order.
    pub by_group: Vec<(String, TagStatistics)>,
}
