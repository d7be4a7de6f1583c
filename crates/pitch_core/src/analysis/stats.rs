//! # Descriptive Statistics Helpers
//!
//! Shared numeric building blocks for the aggregators.
//!
//! Two degenerate cases are kept apart on purpose:
//! - rate metrics with a zero denominator are `0.0` ("nothing happened")
//! - spread of fewer than two samples is `None` ("cannot estimate")

use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Round to `decimals` places, ties away from zero (`f64::round`).
///
/// Not banker's rounding: `round_to(2.5, 0)` is `3.0`, where numpy's
/// `round` gives `2.0`. Only exact ties differ.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Arithmetic mean of the present values. NaN counts as missing.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values.into_iter().flatten().filter(|v| !v.is_nan()) {
        sum += v;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Count / mean / sample std / min / max of one numeric field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Number of non-missing values
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` below two values
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSummary {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let present: Vec<f64> = values
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();

        let count = present.len();
        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        let mean = present.iter().sum::<f64>() / n;
        let std = if count < 2 {
            None
        } else {
            let sum_sq = present.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            Some((sum_sq / (n - 1.0)).sqrt())
        };
        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean: Some(mean),
            std,
            min: Some(min),
            max: Some(max),
        }
    }
}
