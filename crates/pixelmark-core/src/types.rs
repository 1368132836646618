// SPDX-License-Identifier: MIT
//
// Core domain types for the benchmark harness.

use serde::{Deserialize, Serialize};

use crate::stats::SummaryStats;

/// Which input variant a benchmark consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// The 3-channel source image as loaded.
    Color,
    /// The single-channel derivative, computed once at startup.
    Grayscale,
}

/// One benchmark's result: identity, raw per-trial durations, and the
/// reduced summary. This is the record serialized in the JSON report mode
/// for downstream cross-language aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Logical operation identifier (e.g. "blur"), shared across language
    /// implementations.
    pub task: String,
    /// Stable implementation identifier, also the output filename stem.
    pub slug: String,
    /// Human-readable description of the implementation.
    pub description: String,
    /// Raw per-trial durations in seconds, in execution order.
    pub times: Vec<f64>,
    /// Reduced summary over `times`.
    #[serde(flatten)]
    pub summary: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_flattened_summary() {
        let times = vec![0.1, 0.2, 0.3];
        let record = BenchmarkRecord {
            task: "invert".to_string(),
            slug: "rs-invert".to_string(),
            description: "color inversion".to_string(),
            summary: SummaryStats::from_samples(&times).unwrap(),
            times,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["task"], "invert");
        assert_eq!(json["slug"], "rs-invert");
        // Summary fields sit at the top level, not under a nested key, and
        // the sample count uses the cross-language field name.
        assert_eq!(json["iterations"], 3);
        assert!(json.get("count").is_none());
        assert!(json["mean"].is_number());
        assert_eq!(json["times"].as_array().unwrap().len(), 3);
    }
}
