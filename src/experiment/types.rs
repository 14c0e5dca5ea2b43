//! Values produced by the experiment runner.

use serde::Serialize;

use crate::locations::Location;
use crate::stats::DailyStats;

/// How jobs are handed to the worker pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// Submit one job, block until it completes, then submit the next.
    /// Only one job is ever in flight, whatever the pool size.
    #[default]
    Serial,
    /// Submit every job up front; up to `pool_size` run at once.
    Concurrent,
}

/// Successful output of one location job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    pub location: Location,
    pub days: Vec<DailyStats>,
}

/// Timing and outcome counts of one experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentResult {
    pub pool_size: usize,
    /// Wall-clock time from the first submission to the end of pool shutdown.
    pub elapsed_ms: u64,
    pub succeeded: usize,
    pub failed: usize,
    pub dispatch: Dispatch,
}
