// SPDX-License-Identifier: MIT
//
// Summary statistics over a sequence of trial durations.

use serde::{Deserialize, Serialize};

use crate::error::{PixelmarkError, Result};

/// Summary of one benchmark's timing samples, all durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of samples reduced. Serialized as `iterations` to match the
    /// record shape shared across the language implementations of this
    /// harness.
    #[serde(rename = "iterations")]
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Element at index `count / 2` of the ascending-sorted samples.
    ///
    /// For even counts this is the upper-middle element, not the interpolated
    /// average of the two middle elements. This deviates from the textbook
    /// median but is kept for output compatibility with the sibling
    /// implementations of this harness in other languages.
    pub median: f64,
    /// Sample (Bessel-corrected, n-1) standard deviation; exactly 0.0 when
    /// `count == 1`.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Sum of all samples.
    pub total: f64,
}

impl SummaryStats {
    /// Reduce an ordered sequence of trial durations into summary statistics.
    ///
    /// Pure function of the input: the slice is copied and sorted internally.
    /// Fails with [`PixelmarkError::EmptySamples`] when the slice is empty,
    /// since the statistics are undefined for zero samples.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(PixelmarkError::EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let n = count as f64;
        let total: f64 = sorted.iter().sum();
        let mean = total / n;
        let median = sorted[count / 2];
        let min = sorted[0];
        let max = sorted[count - 1];

        let std_dev = if count > 1 {
            let sum_sq: f64 = sorted.iter().map(|t| (t - mean).powi(2)).sum();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            count,
            mean,
            median,
            std_dev,
            min,
            max,
            total,
        })
    }
}
