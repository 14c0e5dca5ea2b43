//! Entry point for the thread-scaling weather benchmark.
//!
//! Runs the fixed experiment series (pool sizes 1, 3, 9 and 27) over every
//! location and prints per-city daily statistics and timings to stdout.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_scaling::{
    experiment::{END_DATE, ExperimentRunner, START_DATE, run_all},
    fetch::{DateRange, SimulatedProvider},
    locations::LOCATIONS,
    output::log_json,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file. Stdout carries the report.
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/weather_scaling.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_scaling.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let range = DateRange::parse(START_DATE, END_DATE)?;
    let runner = ExperimentRunner::new(SimulatedProvider::new(), range);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let results = run_all(&runner, LOCATIONS, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    for result in &results {
        log_json(result)?;
    }
    info!(experiments = results.len(), "Benchmark complete");

    Ok(())
}
