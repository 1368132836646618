// SPDX-License-Identifier: MIT
//
// pixelmark-cli — Benchmark registry, harness driver, and report rendering.
//
// Split out as a library so the integration tests can drive the full
// harness without spawning the binary.

pub mod registry;
pub mod report;
pub mod runner;

pub use registry::{registry, Benchmark, OpKind, SourceImages};
pub use runner::run;
