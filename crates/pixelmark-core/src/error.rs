// SPDX-License-Identifier: MIT
//
// Unified error types for pixelmark.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all pixelmark operations.
#[derive(Debug, Error)]
pub enum PixelmarkError {
    // -- Startup errors --
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(u64),

    #[error("unknown task: {0} (no registered benchmark matches)")]
    UnknownTask(String),

    #[error("unknown output format: {0} (expected table, json, or csv)")]
    UnknownFormat(String),

    // -- Measurement errors --
    #[error("cannot summarise an empty sample sequence")]
    EmptySamples,

    // -- Image / persistence --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixelmarkError>;
