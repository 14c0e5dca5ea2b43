use std::ops::Range;

use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use super::DateRange;
use super::open_meteo::request_url;
use super::provider::DataProvider;

/// Stand-in for the Open-Meteo API that draws uniformly random readings.
pub struct SimulatedProvider {
    range: Range<f64>,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self { range: 20.0..30.0 }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for SimulatedProvider {
    fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<f64>> {
        let range = DateRange::new(start, end)?;
        debug!(url = %request_url(latitude, longitude, range), "Simulating hourly fetch");

        let mut rng = rand::rng();
        Ok((0..range.expected_readings())
            .map(|_| rng.random_range(self.range.clone()))
            .collect())
    }
}
