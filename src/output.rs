//! Console rendering of experiment results.
//!
//! Reports go to the caller's writer (stdout in the binary). Logs never do.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::experiment::types::{ExperimentResult, LocationReport};
use crate::stats::DailyStats;

/// Line closing every per-location block.
pub const SEPARATOR: &str = "-------------------------------------------------";

/// Formats one day as `Day  1: Min=20.13, Max=29.87, Avg=24.96`.
pub fn format_day(stats: &DailyStats) -> String {
    format!(
        "Day {:2}: Min={:.2}, Max={:.2}, Avg={:.2}",
        stats.day, stats.min, stats.max, stats.average
    )
}

/// Writes the `City:` header, one line per day and the separator.
pub fn write_report<W: Write>(out: &mut W, report: &LocationReport) -> Result<()> {
    writeln!(out, "City: {}", report.location.name)?;
    for day in &report.days {
        writeln!(out, "{}", format_day(day))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Writes the one-line timing summary of an experiment.
pub fn write_summary<W: Write>(out: &mut W, result: &ExperimentResult) -> Result<()> {
    writeln!(
        out,
        "Experiment with {} threads took {} ms",
        result.pool_size, result.elapsed_ms
    )?;
    Ok(())
}

/// Logs any serializable value as compact JSON at debug level.
pub fn log_json(value: &impl Serialize) -> Result<()> {
    debug!("{}", serde_json::to_string(value)?);
    Ok(())
}
