// Sapphillon
// SPDX-FileCopyrightText: 2025 Yuta Takahashi
// SPDX-License-Identifier: MPL-2.0 OR GPL-3.0-or-later

//! Descriptive statistics over a forecast series.
//!
//! A series is one average temperature (Celsius) per forecast day. The only
//! entry point is [`summarize`], which reduces the series to its minimum,
//! maximum, arithmetic mean and median.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The series was empty or held a non-finite value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StatsError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StatsError::InvalidInput(_))
    }
}

/// The four summary values, in the same unit as the input series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub minimum: f64,
    pub maximum: f64,
    pub average: f64,
    pub median: f64,
}

impl Summary {
    /// Applies `f` to every field. Used to round values for presentation.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            minimum: f(self.minimum),
            maximum: f(self.maximum),
            average: f(self.average),
            median: f(self.median),
        }
    }
}

/// Summarizes `series` without reordering it.
///
/// Fails with [`StatsError::InvalidInput`] when the series is empty or
/// contains NaN or an infinity.
pub fn summarize(series: &[f64]) -> Result<Summary, StatsError> {
    if series.is_empty() {
        return Err(StatsError::InvalidInput("empty series".to_string()));
    }
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(StatsError::InvalidInput(format!(
            "non-finite value {} at index {index}",
            series[index]
        )));
    }

    let mut sorted = series.to_vec();
    // All values are finite, so total_cmp agrees with numeric order.
    sorted.sort_unstable_by(f64::total_cmp);

    let count = sorted.len();
    let (minimum, maximum) = (sorted[0], sorted[count - 1]);
    let middle = count / 2;
    let median = if count % 2 == 1 {
        sorted[middle]
    } else {
        midpoint(sorted[middle - 1], sorted[middle])
    };

    Ok(Summary {
        minimum,
        maximum,
        // Rounding can push the mean of near-equal values just past either end.
        average: mean(&sorted).clamp(minimum, maximum),
        median,
    })
}

/// Midpoint of `low <= high` that stays finite for any finite inputs.
fn midpoint(low: f64, high: f64) -> f64 {
    (low / 2.0 + high / 2.0).clamp(low, high)
}

fn mean(values: &[f64]) -> f64 {
    let count = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        values.iter().map(|value| value / count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within_bounds(series: &[f64]) {
        let summary = summarize(series).unwrap();
        for value in series {
            assert!(summary.minimum <= *value && *value <= summary.maximum);
        }
        assert!(summary.minimum <= summary.median && summary.median <= summary.maximum);
        assert!(summary.minimum <= summary.average && summary.average <= summary.maximum);
    }

    #[test]
    fn odd_count() {
        let summary = summarize(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(
            summary,
            Summary {
                minimum: 10.0,
                maximum: 30.0,
                average: 20.0,
                median: 20.0,
            }
        );
    }

    #[test]
    fn even_count_averages_middle_pair() {
        let summary = summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(
            summary,
            Summary {
                minimum: 10.0,
                maximum: 40.0,
                average: 25.0,
                median: 25.0,
            }
        );
    }

    #[test]
    fn unsorted_with_repeats() {
        let summary = summarize(&[15.5, 15.5, 9.0, 22.0]).unwrap();
        assert_eq!(
            summary,
            Summary {
                minimum: 9.0,
                maximum: 22.0,
                average: 15.5,
                median: 15.5,
            }
        );
    }

    #[test]
    fn single_value() {
        let summary = summarize(&[-3.25]).unwrap();
        assert_eq!(summary.minimum, -3.25);
        assert_eq!(summary.maximum, -3.25);
        assert_eq!(summary.average, -3.25);
        assert_eq!(summary.median, -3.25);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = summarize(&[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = summarize(&[12.0, bad, 14.0]).unwrap_err();
            assert!(err.is_invalid_input());
            assert!(err.to_string().contains("index 1"), "{err}");
        }
    }

    #[test]
    fn input_order_is_left_untouched() {
        let series = vec![3.0, 1.0, 2.0];
        summarize(&series).unwrap();
        assert_eq!(series, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn permutations_agree() {
        let base = [4.5, -1.0, 12.0, 7.25, 0.0];
        let expected = summarize(&base).unwrap();
        let mut rotated = base;
        for _ in 0..base.len() {
            rotated.rotate_left(1);
            assert_eq!(summarize(&rotated).unwrap(), expected);
        }
        let mut reversed = base;
        reversed.reverse();
        assert_eq!(summarize(&reversed).unwrap(), expected);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let series = [8.1, 9.3, 7.7, 10.4, 11.0, 6.2];
        assert_eq!(summarize(&series).unwrap(), summarize(&series).unwrap());
    }

    #[test]
    fn statistics_stay_within_bounds() {
        assert_within_bounds(&[1.0]);
        assert_within_bounds(&[-5.0, 5.0]);
        assert_within_bounds(&[0.1, 0.2, 0.3, 100.0]);
        assert_within_bounds(&[
            11.2, 12.9, 10.4, 9.8, 14.1, 15.0, 13.3, 12.2, 11.9, 10.0, 9.1, 8.7, 12.5, 13.8,
        ]);
    }

    #[test]
    fn average_of_repeated_value_is_that_value() {
        let summary = summarize(&[15.3, 15.3, 15.3]).unwrap();
        assert_eq!(summary.average, 15.3);
        assert_eq!(summary.median, 15.3);
        assert_within_bounds(&[15.3, 15.3, 15.3]);
        assert_within_bounds(&[0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]);
    }

    #[test]
    fn extreme_values_stay_finite() {
        let summary = summarize(&[f64::MAX, f64::MAX]).unwrap();
        assert_eq!(summary.average, f64::MAX);
        assert_eq!(summary.median, f64::MAX);

        let summary = summarize(&[-f64::MAX, f64::MAX]).unwrap();
        assert_eq!(summary.median, 0.0);
        assert!(summary.average.is_finite());

        let summary = summarize(&[f64::MAX, f64::MAX, f64::MAX]).unwrap();
        assert_eq!(summary.average, f64::MAX);
    }

    #[test]
    fn map_applies_to_every_field() {
        let summary = summarize(&[1.0, 2.0]).unwrap().map(|v| v * 2.0);
        assert_eq!(summary.minimum, 2.0);
        assert_eq!(summary.maximum, 4.0);
        assert_eq!(summary.average, 3.0);
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn serializes_field_names() {
        let value = serde_json::to_value(summarize(&[2.0]).unwrap()).unwrap();
        assert_eq!(value["minimum"], 2.0);
        assert_eq!(value["median"], 2.0);
    }
}
