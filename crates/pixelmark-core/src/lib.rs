// SPDX-License-Identifier: MIT
//
// pixelmark-core — Shared types for the pixelmark benchmark harness.
//
// Provides the error taxonomy, run configuration, the summary-statistics
// reducer for timing samples, and the per-benchmark result record.

pub mod config;
pub mod error;
pub mod stats;
pub mod types;

pub use config::{OpParams, OutputFormat, RunConfig};
pub use error::PixelmarkError;
pub use stats::SummaryStats;
pub use types::{BenchmarkRecord, InputKind};
