// SPDX-License-Identifier: MIT
//
// Run configuration for the benchmark harness.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PixelmarkError;

/// How the final report is rendered to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width human-readable table.
    Table,
    /// Pretty-printed JSON array embedding per-trial raw durations.
    Json,
    /// Comma-separated summary rows.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = PixelmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(PixelmarkError::UnknownFormat(other.to_string())),
        }
    }
}

/// Tunable parameters for the individual transforms.
///
/// The harness keeps these explicit rather than burying constants in the
/// transform bodies, so the same kernels can be reused with different
/// settings from the criterion benches and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpParams {
    /// Standard deviation of the Gaussian blur kernel.
    pub blur_sigma: f32,
    /// Lower hysteresis threshold for Canny edge detection.
    pub canny_low: f32,
    /// Upper hysteresis threshold for Canny edge detection.
    pub canny_high: f32,
    /// Angle (degrees, clockwise) for the arbitrary-rotation benchmark.
    pub rotate_degrees: f32,
    /// Half-window radius for the Lee speckle filter (3 gives a 7x7 window).
    pub lee_radius: u32,
}

impl Default for OpParams {
    fn default() -> Self {
        Self {
            blur_sigma: 1.0,
            canny_low: 50.0,
            canny_high: 150.0,
            rotate_degrees: 45.0,
            lee_radius: 3,
        }
    }
}

/// Full configuration for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Path to the source raster image.
    pub image_path: PathBuf,
    /// Number of timed trials per benchmark.
    pub iterations: u64,
    /// Optional exact-match task filter; `None` runs every benchmark.
    pub task_filter: Option<String>,
    /// Directory receiving one output image per executed benchmark.
    pub output_dir: PathBuf,
    /// Report rendering mode.
    pub format: OutputFormat,
    /// Transform tunables.
    pub params: OpParams,
}

impl RunConfig {
    /// Convenience constructor with the harness defaults (101 iterations,
    /// table output, `output/` next to the working directory).
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            iterations: 101,
            task_filter: None,
            output_dir: PathBuf::from("output"),
            format: OutputFormat::Table,
            params: OpParams::default(),
        }
    }
}
