//! Shape of the Open-Meteo request a real provider would send.
//!
//! Nothing here performs I/O. The URL is only rendered for logging.

use super::DateRange;

pub const BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const PARAMETERS: &str = "&hourly=temperature_2m";

/// Renders the forecast URL for hourly 2 m temperatures at a coordinate.
pub fn request_url(latitude: f64, longitude: f64, range: DateRange) -> String {
    format!(
        "{BASE_URL}?latitude={latitude}&longitude={longitude}&start_date={}&end_date={}{}",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d"),
        PARAMETERS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(
            request_url(-15.7801, -47.9292, range),
            "https://api.open-meteo.com/v1/forecast?latitude=-15.7801&longitude=-47.9292\
             &start_date=2024-01-01&end_date=2024-01-31&hourly=temperature_2m"
        );
    }
}
