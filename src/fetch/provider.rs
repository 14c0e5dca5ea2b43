use anyhow::Result;
use chrono::NaiveDate;

/// Source of hourly temperature readings for a coordinate.
///
/// Implementations must return exactly `days_in_range(start, end) * 24`
/// values, ordered by hour. Errors are contained by the caller and never
/// abort sibling jobs.
pub trait DataProvider: Send + Sync {
    fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<f64>>;
}
