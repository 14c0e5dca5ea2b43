use serde::Serialize;

use crate::fetch::HOURS_PER_DAY;

/// Min, max and mean of one day's hourly readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStats {
    /// 1-based day index within the fetched range.
    pub day: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Readings that fell on this day; 24 except for a trailing partial day.
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
struct DayAccumulator {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl DayAccumulator {
    fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
            sum: temperature,
            count: 1,
        }
    }

    fn update(&mut self, temperature: f64) {
        self.min = f64::min(self.min, temperature);
        self.max = f64::max(self.max, temperature);
        self.sum += temperature;
        self.count += 1;
    }
}

/// Reduces an hourly series into per-day statistics.
///
/// Every 24 consecutive readings form one day. A trailing partial day is
/// still reported over the readings it has, so the result holds
/// `ceil(len / 24)` entries in ascending day order. Empty input yields an
/// empty result.
pub fn aggregate(readings: &[f64]) -> Vec<DailyStats> {
    let mut days: Vec<DayAccumulator> = Vec::with_capacity(readings.len().div_ceil(HOURS_PER_DAY));

    for (hour, &temperature) in readings.iter().enumerate() {
        let day = hour / HOURS_PER_DAY;
        match days.get_mut(day) {
            Some(acc) => acc.update(temperature),
            None => days.push(DayAccumulator::new(temperature)),
        }
    }

    // a day only gets an accumulator once it has a reading, so count > 0
    days.iter()
        .enumerate()
        .map(|(index, acc)| DailyStats {
            day: index + 1,
            min: acc.min,
            max: acc.max,
            average: acc.sum / acc.count as f64,
            count: acc.count,
        })
        .collect()
}
