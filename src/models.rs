use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FORECAST_DAYS;

// ============================================================================
// Weather Data
// ============================================================================

/// Current conditions for a location, temperatures in Celsius
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherRecord {
    pub temperature: i32,
    pub conditions: String,
    pub humidity: i32,
    pub wind_speed: i32,
    pub feels_like: i32,
}

impl WeatherRecord {
    pub fn new(
        temperature: i32,
        conditions: &str,
        humidity: i32,
        wind_speed: i32,
        feels_like: i32,
    ) -> Self {
        Self {
            temperature,
            conditions: conditions.to_string(),
            humidity,
            wind_speed,
            feels_like,
        }
    }
}

// ============================================================================
// Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// The city or location to get weather for.
    pub location: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// The city or location to get forecast for.
    pub location: String,
    /// Number of days to forecast (default: 3).
    #[serde(default = "default_forecast_days")]
    pub days: i32,
}

fn default_forecast_days() -> i32 {
    DEFAULT_FORECAST_DAYS
}
