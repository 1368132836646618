// SPDX-License-Identifier: MIT
//
// pixelmark — image-processing micro-benchmark harness.
//
// Entry point. Initialises logging (stderr, so the report owns stdout),
// parses arguments, runs the harness, and renders the report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pixelmark_core::{OpParams, OutputFormat, PixelmarkError, RunConfig};

use pixelmark_cli::{report, runner};

#[derive(Parser)]
#[command(name = "pixelmark")]
#[command(about = "Benchmark classic image-processing operations", version)]
struct Cli {
    /// Path to the source image (PNG or any format the image crate decodes)
    image: PathBuf,

    /// Number of timed trials per benchmark
    #[arg(
        short = 'n',
        long,
        default_value_t = 101,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    iterations: u64,

    /// Only run benchmarks whose task name matches exactly (e.g. "blur")
    #[arg(long)]
    task: Option<String>,

    /// Report format on stdout
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Directory receiving one output image per executed benchmark
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PixelmarkError> {
    let config = RunConfig {
        image_path: cli.image,
        iterations: cli.iterations,
        task_filter: cli.task,
        output_dir: cli.output_dir,
        format: cli.format,
        params: OpParams::default(),
    };

    let records = runner::run(&config)?;
    let rendered = report::render(&records, config.format)?;
    println!("{rendered}");
    Ok(())
}
