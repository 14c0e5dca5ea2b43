use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use tokio::runtime::Runtime;
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{Instrument, debug, error, info};

use crate::experiment::types::{Dispatch, ExperimentResult, LocationReport};
use crate::fetch::{DataProvider, DateRange, fetch_readings};
use crate::locations::Location;
use crate::output::{write_report, write_summary};
use crate::stats::aggregate;

/// Drives every location through a fixed-size worker pool and times it.
pub struct ExperimentRunner<P> {
    provider: Arc<P>,
    range: DateRange,
    dispatch: Dispatch,
}

impl<P: DataProvider + 'static> ExperimentRunner<P> {
    pub fn new(provider: P, range: DateRange) -> Self {
        Self {
            provider: Arc::new(provider),
            range,
            dispatch: Dispatch::Serial,
        }
    }

    /// Switches the submission protocol. [`Dispatch::Serial`] is the default.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Runs one experiment with a pool of `pool_size` worker threads.
    ///
    /// Each job's report block is written to `out` as soon as the job
    /// completes, in location order, followed by the timing line once the
    /// pool has shut down. A failing job is logged and counted, never
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if `pool_size` is zero, `locations` is empty, the
    /// worker pool cannot be built, or `out` cannot be written to.
    #[tracing::instrument(
        skip(self, locations, out),
        fields(locations = locations.len(), dispatch = ?self.dispatch)
    )]
    pub fn run<W: Write>(
        &self,
        pool_size: usize,
        locations: &[Location],
        out: &mut W,
    ) -> Result<ExperimentResult> {
        ensure!(pool_size >= 1, "pool size must be at least 1");
        ensure!(!locations.is_empty(), "no locations to process");

        let runtime = build_pool(pool_size)?;
        info!("Starting experiment");

        let start = Instant::now();
        let mut tally = Tally::default();

        match self.dispatch {
            Dispatch::Serial => {
                for location in locations {
                    let job = location_job(Arc::clone(&self.provider), *location, self.range);
                    let handle = runtime.spawn(job);
                    // the next job is not submitted until this one is done
                    let outcome = runtime.block_on(handle);
                    tally.record(location, outcome, out)?;
                }
            }
            Dispatch::Concurrent => {
                let permits = Arc::new(Semaphore::new(pool_size));
                let handles: Vec<_> = locations
                    .iter()
                    .map(|location| {
                        let permits = Arc::clone(&permits);
                        let job = location_job(Arc::clone(&self.provider), *location, self.range);
                        runtime.spawn(async move {
                            let _permit = permits
                                .acquire_owned()
                                .await
                                .context("worker pool semaphore closed")?;
                            job.await
                        })
                    })
                    .collect();

                for (location, handle) in locations.iter().zip(handles) {
                    let outcome = runtime.block_on(handle);
                    tally.record(location, outcome, out)?;
                }
            }
        }

        // waits for the workers to exit, with no timeout
        drop(runtime);
        let elapsed = start.elapsed();

        let result = ExperimentResult {
            pool_size,
            elapsed_ms: whole_millis(elapsed),
            succeeded: tally.succeeded,
            failed: tally.failed,
            dispatch: self.dispatch,
        };
        write_summary(out, &result)?;

        info!(
            elapsed_ms = result.elapsed_ms,
            succeeded = result.succeeded,
            failed = result.failed,
            "Experiment finished"
        );
        Ok(result)
    }
}

/// Fetches and aggregates the readings of one location.
pub fn process_location<P: DataProvider + ?Sized>(
    provider: &P,
    location: Location,
    range: DateRange,
) -> Result<LocationReport> {
    let readings = fetch_readings(provider, &location, range)?;
    debug!(readings = readings.len(), "Readings received, aggregating");

    let days = aggregate(&readings);
    Ok(LocationReport { location, days })
}

fn location_job<P: DataProvider + 'static>(
    provider: Arc<P>,
    location: Location,
    range: DateRange,
) -> impl Future<Output = Result<LocationReport>> + Send + 'static {
    let span = tracing::info_span!("process_location", location = location.name);
    async move { process_location(provider.as_ref(), location, range) }.instrument(span)
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn build_pool(pool_size: usize) -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(pool_size)
        .thread_name("experiment-worker")
        .enable_all()
        .build()
        .with_context(|| format!("failed to build worker pool of {pool_size} threads"))
}

#[derive(Default)]
struct Tally {
    succeeded: usize,
    failed: usize,
}

impl Tally {
    /// Writes a finished job's report, or logs why it has none.
    fn record<W: Write>(
        &mut self,
        location: &Location,
        outcome: Result<Result<LocationReport>, JoinError>,
        out: &mut W,
    ) -> Result<()> {
        match outcome {
            Ok(Ok(report)) => {
                write_report(out, &report)?;
                self.succeeded += 1;
            }
            Ok(Err(e)) => {
                error!(location = location.name, error = ?e, "Location job failed");
                self.failed += 1;
            }
            Err(e) => {
                error!(location = location.name, error = %e, "Location job failed");
                self.failed += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Constant(f64);

    impl DataProvider for Constant {
        fn fetch(&self, _: f64, _: f64, start: NaiveDate, end: NaiveDate) -> Result<Vec<f64>> {
            Ok(vec![self.0; DateRange::new(start, end)?.expected_readings()])
        }
    }

    fn runner() -> ExperimentRunner<Constant> {
        let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
        ExperimentRunner::new(Constant(22.0), range)
    }

    #[test]
    fn test_process_location() {
        let location = Location::new("Palmas", -10.24, -48.3558);
        let report = process_location(&Constant(22.0), location, runner().range()).unwrap();

        assert_eq!(report.location, location);
        assert_eq!(report.days.len(), 3);
        assert!(report.days.iter().all(|d| d.average == 22.0));
    }

    #[test]
    fn test_whole_millis_saturates() {
        assert_eq!(whole_millis(Duration::from_micros(1_999)), 1);
        assert_eq!(whole_millis(Duration::from_secs(3)), 3_000);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_zero_pool_size_is_rejected() {
        let mut out = Vec::new();
        let locations = [Location::new("Recife", -8.0476, -34.8770)];
        assert!(runner().run(0, &locations, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_locations_are_rejected() {
        let mut out = Vec::new();
        assert!(runner().run(1, &[], &mut out).is_err());
    }

    #[test]
    fn test_default_dispatch_is_serial() {
        assert_eq!(runner().dispatch(), Dispatch::Serial);
        assert_eq!(
            runner().with_dispatch(Dispatch::Concurrent).dispatch(),
            Dispatch::Concurrent
        );
    }

    #[test]
    fn test_run_counts_successes() {
        let mut out = Vec::new();
        let locations = [
            Location::new("Recife", -8.0476, -34.8770),
            Location::new("Natal", -5.7945, -35.2110),
        ];
        let result = runner().run(3, &locations, &mut out).unwrap();

        assert_eq!(result.pool_size, 3);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed, 0);
        assert_eq!(result.dispatch, Dispatch::Serial);
    }
}
