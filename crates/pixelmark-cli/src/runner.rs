// SPDX-License-Identifier: MIT
//
// Harness driver — loads the input once, times N sequential trials per
// benchmark, persists the last trial's output, and reduces the samples.

use std::fs;
use std::time::Instant;

use pixelmark_core::error::Result;
use pixelmark_core::{BenchmarkRecord, PixelmarkError, RunConfig, SummaryStats};
use tracing::{debug, info};

use crate::registry::{registry, Benchmark, SourceImages};

/// Run every registered benchmark matching the configured task filter, in
/// declaration order, returning one record per executed benchmark.
///
/// Fails before any timing begins when the input image is missing, the
/// iteration count is zero, or the filter matches no registered benchmark.
pub fn run(config: &RunConfig) -> Result<Vec<BenchmarkRecord>> {
    if config.iterations == 0 {
        return Err(PixelmarkError::InvalidIterations(0));
    }
    if !config.image_path.exists() {
        return Err(PixelmarkError::InputNotFound(config.image_path.clone()));
    }

    // Resolve the task filter before decoding the image or creating the
    // output directory: an unknown task must leave no side effects behind.
    let all = registry();
    let selected: Vec<&Benchmark> = match &config.task_filter {
        Some(task) => {
            let matching: Vec<_> = all.iter().filter(|b| b.task == *task).collect();
            if matching.is_empty() {
                return Err(PixelmarkError::UnknownTask(task.clone()));
            }
            matching
        }
        None => all.iter().collect(),
    };

    let color = image::open(&config.image_path)
        .map_err(|err| {
            PixelmarkError::ImageError(format!(
                "failed to decode {}: {}",
                config.image_path.display(),
                err
            ))
        })?
        .into_rgb8();
    info!(
        width = color.width(),
        height = color.height(),
        path = %config.image_path.display(),
        "Source image loaded"
    );
    let src = SourceImages::new(color);

    fs::create_dir_all(&config.output_dir)?;

    let mut records = Vec::with_capacity(selected.len());
    for bench in selected {
        records.push(run_benchmark(bench, &src, config)?);
    }
    Ok(records)
}

/// Time `config.iterations` sequential executions of one benchmark. The
/// clock brackets only the transform call; the last trial's output is the
/// artifact persisted to `<output_dir>/<slug>.png`.
fn run_benchmark(
    bench: &Benchmark,
    src: &SourceImages,
    config: &RunConfig,
) -> Result<BenchmarkRecord> {
    info!(
        task = bench.task,
        slug = bench.slug,
        iterations = config.iterations,
        input = ?bench.input,
        "Running benchmark"
    );

    let mut times = Vec::with_capacity(config.iterations as usize);
    let mut last_output = None;

    for _ in 0..config.iterations {
        let start = Instant::now();
        let output = bench.op.execute(src, &config.params);
        let elapsed = start.elapsed().as_secs_f64();
        times.push(elapsed);
        last_output = Some(output);
    }

    // iterations >= 1 is checked in run(), so the loop body ran.
    let output = last_output.ok_or(PixelmarkError::InvalidIterations(0))?;
    let artifact = config.output_dir.join(format!("{}.png", bench.slug));
    output.save(&artifact).map_err(|err| {
        PixelmarkError::ImageError(format!(
            "failed to save {}: {}",
            artifact.display(),
            err
        ))
    })?;
    debug!(path = %artifact.display(), "Benchmark artifact written");

    let summary = SummaryStats::from_samples(&times)?;
    Ok(BenchmarkRecord {
        task: bench.task.to_string(),
        slug: bench.slug.to_string(),
        description: bench.description.to_string(),
        times,
        summary,
    })
}
