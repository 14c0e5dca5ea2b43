//! Hourly temperature retrieval.
//!
//! [`DataProvider`] is the seam between the experiment and wherever readings
//! come from. [`SimulatedProvider`] stands in for the Open-Meteo API, whose
//! request shape is described in [`open_meteo`].

mod provider;
mod simulated;
pub mod open_meteo;

pub use provider::DataProvider;
pub use simulated::SimulatedProvider;

use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use serde::Serialize;

use crate::locations::Location;

/// Number of readings a provider returns per calendar day.
pub const HOURS_PER_DAY: usize = 24;

/// Inclusive range of calendar dates to fetch readings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        ensure!(start <= end, "date range ends ({end}) before it starts ({start})");
        Ok(Self { start, end })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .with_context(|| format!("invalid start date '{start}'"))?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .with_context(|| format!("invalid end date '{end}'"))?;
        Self::new(start, end)
    }

    pub fn days(&self) -> usize {
        // `new` guarantees end >= start
        (self.end - self.start).num_days() as usize + 1
    }

    /// Number of hourly readings a provider must return for this range.
    pub fn expected_readings(&self) -> usize {
        self.days() * HOURS_PER_DAY
    }
}

/// Counts the calendar days in `[start, end]`.
///
/// # Errors
///
/// Returns an error if `end` is before `start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Result<usize> {
    Ok(DateRange::new(start, end)?.days())
}

/// Fetches the readings for `location` and checks the provider honored the
/// `days × 24` contract.
pub fn fetch_readings<P: DataProvider + ?Sized>(
    provider: &P,
    location: &Location,
    range: DateRange,
) -> Result<Vec<f64>> {
    let readings = provider
        .fetch(location.latitude, location.longitude, range.start, range.end)
        .with_context(|| format!("fetching readings for {}", location.name))?;

    let expected = range.expected_readings();
    ensure!(
        readings.len() == expected,
        "provider returned {} readings for {}, expected {}",
        readings.len(),
        location.name,
        expected
    );

    Ok(readings)
}
