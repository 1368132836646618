// SPDX-License-Identifier: MIT
//
// Report rendering — fixed-width table, JSON (with raw per-trial times),
// and CSV summaries on stdout.

use pixelmark_core::error::Result;
use pixelmark_core::{BenchmarkRecord, OutputFormat};

/// Render the records in the requested format.
pub fn render(records: &[BenchmarkRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(to_table(records)),
        OutputFormat::Json => to_json(records),
        OutputFormat::Csv => Ok(to_csv(records)),
    }
}

/// Fixed-width summary table, one row per benchmark in execution order.
pub fn to_table(records: &[BenchmarkRecord]) -> String {
    let header = format!(
        "{:<20} {:<25} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "task", "slug", "mean", "median", "std_dev", "min", "max", "total"
    );
    let mut lines = vec![header.clone(), "-".repeat(header.len())];

    for r in records {
        let s = &r.summary;
        lines.push(format!(
            "{:<20} {:<25} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            r.task, r.slug, s.mean, s.median, s.std_dev, s.min, s.max, s.total
        ));
    }

    lines.join("\n")
}

/// Pretty-printed JSON array embedding the raw per-trial durations, for
/// downstream cross-language aggregation.
pub fn to_json(records: &[BenchmarkRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Comma-separated summary rows with a header line. Text fields containing
/// commas, quotes, or newlines are double-quoted per RFC 4180, so rows stay
/// aligned with the header for any CSV consumer.
pub fn to_csv(records: &[BenchmarkRecord]) -> String {
    let mut lines = vec![
        "task,slug,description,iterations,mean,median,std_dev,min,max,total".to_string(),
    ];
    for r in records {
        let s = &r.summary;
        lines.push(format!(
            "{},{},{},{},{},{},{},{},{},{}",
            csv_field(&r.task),
            csv_field(&r.slug),
            csv_field(&r.description),
            s.count,
            s.mean,
            s.median,
            s.std_dev,
            s.min,
            s.max,
            s.total
        ));
    }
    lines.join("\n")
}

/// Quote a CSV field when it contains a delimiter, quote, or newline;
/// embedded quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
