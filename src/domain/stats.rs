//! Statistics primitives over plain answer values.

use tracing::trace;

use crate::domain::entities::FiveNumberSummary;
use crate::domain::error::{DomainError, DomainResult};

/// Arithmetic mean; `0.0` for an empty slice.
pub fn compute_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an already sorted, non-empty slice.
fn sorted_median(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    if len % 2 == 1 {
        sorted[(len - 1) / 2]
    } else {
        (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    }
}

/// Median of arbitrary values.
pub fn median(values: &[f64]) -> DomainResult<f64> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput {
            operation: "median",
        });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted_median(&sorted))
}

/// Five-number summary using exclusive hinges.
///
/// Q1 and Q3 are the medians of the lowest and highest `n / 2` values
/// (rounded down); for odd `n` the middle value belongs to neither half.
/// Single-value input yields the value in all five positions.
pub fn five_number_summary(values: &[f64]) -> DomainResult<FiveNumberSummary> {
    if values.is_empty() {
        return Err(DomainError::EmptyInput {
            operation: "five-number summary",
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let len = sorted.len();
    let half = len / 2;

    let median = sorted_median(&sorted);
    // n == 1 leaves both halves empty; the lone value is its own hinge
    let (q1, q3) = if half == 0 {
        (median, median)
    } else {
        (
            sorted_median(&sorted[..half]),
            sorted_median(&sorted[len - half..]),
        )
    };

    let summary = FiveNumberSummary {
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[len - 1],
    };
    trace!(count = len, ?summary, "five-number summary");
    Ok(summary)
}
