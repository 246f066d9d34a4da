use crate::constants::MAX_FORECAST_DAYS;
use crate::formatters::format_forecast;
use crate::models::WeatherRecord;

/// Locations with simulated weather data, lower-cased
pub const KNOWN_LOCATIONS: [&str; 5] = [
    "seattle",
    "san francisco",
    "new york city",
    "miami",
    "chicago",
];

fn known_weather(location: &str) -> Option<WeatherRecord> {
    match location {
        "seattle" => Some(WeatherRecord::new(11, "rainy", 75, 12, 10)),
        "san francisco" => Some(WeatherRecord::new(14, "foggy", 85, 8, 13)),
        "new york city" => Some(WeatherRecord::new(18, "sunny", 60, 10, 17)),
        "miami" => Some(WeatherRecord::new(29, "hot and humid", 90, 5, 32)),
        "chicago" => Some(WeatherRecord::new(9, "windy", 65, 20, 6)),
        _ => None,
    }
}

/// Record returned for any location without simulated data
pub fn default_weather() -> WeatherRecord {
    WeatherRecord::new(21, "partly cloudy", 50, 10, 20)
}

/// Gets the current weather for a location
///
/// Matching is case-insensitive. Unknown locations fall back to
/// [`default_weather`], so this never fails.
pub fn get_weather(location: &str) -> WeatherRecord {
    tracing::info!("[get_weather] Called with location: {}", location);

    let location_lower = location.to_lowercase();
    tracing::debug!("[get_weather] Normalized location: {}", location_lower);
    tracing::debug!("[get_weather] Available locations: {:?}", KNOWN_LOCATIONS);

    if let Some(record) = known_weather(&location_lower) {
        tracing::info!(
            "[get_weather] Found weather data for {}: {:?}",
            location_lower,
            record
        );
        return record;
    }

    let record = default_weather();
    tracing::info!(
        "[get_weather] Using default weather data for {}: {:?}",
        location_lower,
        record
    );
    record
}

/// Gets the weather forecast for a location
pub fn get_forecast(location: &str, days: i32) -> String {
    tracing::info!(
        "[get_forecast] Called with location: {}, days: {}",
        location,
        days
    );

    tracing::debug!(
        "[get_forecast] Requested days: {}, forecast lines: {}",
        days,
        days.clamp(0, MAX_FORECAST_DAYS)
    );

    let forecast = format_forecast(location, days);
    tracing::info!("[get_forecast] Generated forecast: {}", forecast);
    forecast
}
