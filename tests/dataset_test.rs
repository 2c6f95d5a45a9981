//! Integration tests for Dataset filtering and statistics.

use rstest::rstest;

use surveypie::domain::{
    compute_average, five_number_summary, AnswerRecord, Dataset, Diagnostics, DomainError,
};
use surveypie::util::testing;

fn records() -> Vec<AnswerRecord> {
    vec![
        AnswerRecord::new("Q1", "teachers", 80.0),
        AnswerRecord::new("Q2", "teachers", 40.0),
        AnswerRecord::new("Q1", "students", 60.0),
        AnswerRecord::new("Q1", "teachers", 100.0),
    ]
}

// ============================================================
// compute_average / five_number_summary
// ============================================================

#[rstest]
#[case(&[], 0.0)]
#[case(&[7.0], 7.0)]
#[case(&[2.0, 4.0], 3.0)]
fn given_values_when_averaging_then_returns_mean_or_zero(
    #[case] values: &[f64],
    #[case] expected: f64,
) {
    assert_eq!(compute_average(values), expected);
}

#[rstest]
#[case(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], [1.0, 2.5, 4.5, 6.5, 8.0])]
#[case(&[1.0, 2.0, 3.0, 4.0, 5.0], [1.0, 1.5, 3.0, 4.5, 5.0])]
#[case(&[5.0, 1.0, 4.0, 2.0, 3.0], [1.0, 1.5, 3.0, 4.5, 5.0])]
#[case(&[3.0, 1.0, 2.0], [1.0, 1.0, 2.0, 3.0, 3.0])]
#[case(&[4.0, 1.0, 3.0, 2.0], [1.0, 1.5, 2.5, 3.5, 4.0])]
fn given_values_when_summarizing_then_uses_exclusive_hinges(
    #[case] values: &[f64],
    #[case] expected: [f64; 5],
) {
    let summary = five_number_summary(values).unwrap();
    assert_eq!(summary.to_array(), expected);
}

#[test]
fn given_no_values_when_summarizing_then_fails_with_empty_input() {
    let result = five_number_summary(&[]);
    assert!(matches!(result, Err(DomainError::EmptyInput { .. })));
}

// ============================================================
// tags and filters
// ============================================================

#[test]
fn given_records_when_constructing_then_tags_are_distinct_in_first_seen_order() {
    // Arrange / Act
    let dataset = Dataset::new(records());

    // Assert
    assert_eq!(dataset.question_tags(), ["Q1", "Q2"]);
    assert_eq!(dataset.group_tags(), ["teachers", "students"]);
}

#[test]
fn given_no_filters_when_getting_answers_then_returns_all_in_order() {
    let dataset = Dataset::new(records());
    assert_eq!(dataset.answers(None, None), vec![80.0, 40.0, 60.0, 100.0]);
}

#[test]
fn given_question_and_group_when_getting_answers_then_both_filters_apply() {
    let dataset = Dataset::new(records());

    assert_eq!(dataset.answers(Some("Q1"), None).len(), 3);
    assert_eq!(dataset.answers(Some("Q1"), Some("teachers")), vec![80.0, 100.0]);
    assert_eq!(dataset.answers(None, Some("students")), vec![60.0]);
}

#[test]
fn given_unknown_tag_when_getting_answers_then_empty_and_reported() {
    // Arrange
    testing::init_test_setup();
    let dataset = Dataset::new(records());
    let mut diagnostics = Diagnostics::new();

    // Act
    let answers = dataset.answers_reporting(Some("Q9"), Some("teachers"), &mut diagnostics);

    // Assert
    assert!(answers.is_empty());
    assert_eq!(diagnostics.len(), 1);
    let warning = &diagnostics.warnings()[0];
    assert_eq!(warning.question_tag.as_deref(), Some("Q9"));
    assert_eq!(warning.group.as_deref(), Some("teachers"));
    assert_eq!(dataset.average(Some("Q9"), None), 0.0);
}

#[test]
fn given_group_when_filtering_then_returns_question_answer_pairs() {
    let dataset = Dataset::new(records());

    let by_group = dataset.filter_by_group("teachers");
    let questions: Vec<_> = by_group.iter().map(|qa| qa.question_tag.as_str()).collect();

    assert_eq!(questions, ["Q1", "Q2", "Q1"]);
}

#[test]
fn given_question_when_filtering_then_returns_group_answer_pairs() {
    let dataset = Dataset::new(records());

    let by_question = dataset.filter_by_question("Q1");
    let groups: Vec<_> = by_question.iter().map(|ga| ga.group.as_str()).collect();

    assert_eq!(groups, ["teachers", "students", "teachers"]);
}

#[test]
fn given_two_datasets_when_concatenating_then_records_keep_order_and_tags_rederive() {
    // Arrange
    let first = Dataset::new(vec![AnswerRecord::new("Q1", "a", 1.0)]);
    let second = Dataset::new(vec![
        AnswerRecord::new("Q2", "b", 2.0),
        AnswerRecord::new("Q1", "a", 3.0),
    ]);

    // Act
    let merged = Dataset::concat([&first, &second]);

    // Assert
    assert_eq!(merged.answers(None, None), vec![1.0, 2.0, 3.0]);
    assert_eq!(merged.question_tags(), ["Q1", "Q2"]);
    assert_eq!(merged.group_tags(), ["a", "b"]);
}

#[test]
fn given_dataset_when_summarizing_questions_then_missing_groups_have_no_summary() {
    // Arrange
    let dataset = Dataset::new(records());

    // Act
    let summaries = dataset.question_summaries();

    // Assert
    assert_eq!(summaries.len(), 2);
    let q2 = &summaries[1];
    assert_eq!(q2.question_tag, "Q2");
    assert_eq!(q2.total.count, 1);
    let (group, students) = &q2.by_group[1];
    assert_eq!(group, "students");
    assert_eq!(students.count, 0);
    assert_eq!(students.mean, 0.0);
    assert!(students.summary.is_none());
}
