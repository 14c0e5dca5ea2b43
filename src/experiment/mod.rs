//! Thread-scaling experiments.
//!
//! An experiment pushes every location through a worker pool of a given
//! size and reports how long the whole batch took. [`run_all`] repeats that
//! for each entry of [`POOL_SIZES`].

pub mod runner;
pub mod types;

pub use runner::{ExperimentRunner, process_location};
pub use types::{Dispatch, ExperimentResult, LocationReport};

use anyhow::Result;
use std::io::Write;

use crate::fetch::DataProvider;
use crate::locations::Location;

/// Worker-pool sizes compared by the benchmark, in run order.
pub const POOL_SIZES: [usize; 4] = [1, 3, 9, 27];

/// First day of the fetched range.
pub const START_DATE: &str = "2024-01-01";
/// Last day of the fetched range, inclusive.
pub const END_DATE: &str = "2024-01-31";

/// Runs one experiment per pool size, in order, against `locations`.
pub fn run_series<P, W>(
    runner: &ExperimentRunner<P>,
    pool_sizes: &[usize],
    locations: &[Location],
    out: &mut W,
) -> Result<Vec<ExperimentResult>>
where
    P: DataProvider + 'static,
    W: Write,
{
    pool_sizes
        .iter()
        .map(|&pool_size| runner.run(pool_size, locations, out))
        .collect()
}

/// Runs the full benchmark: every size in [`POOL_SIZES`].
pub fn run_all<P, W>(
    runner: &ExperimentRunner<P>,
    locations: &[Location],
    out: &mut W,
) -> Result<Vec<ExperimentResult>>
where
    P: DataProvider + 'static,
    W: Write,
{
    run_series(runner, &POOL_SIZES, locations, out)
}
