/// Name the weather agent registers under
pub const AGENT_NAME: &str = "weather_agent";

/// System instructions handed to the model
pub const AGENT_INSTRUCTIONS: &str = "You are a helpful weather assistant. \
    Use the get_weather and get_forecast functions to help users with weather information. \
    Always provide friendly and informative responses.";

/// MCP server name
pub const SERVER_NAME: &str = "weather-agent";

pub const GET_WEATHER_TOOL: &str = "get_weather";
pub const GET_WEATHER_DESCRIPTION: &str = "Get the current weather for a location. \
    Returns temperature, conditions, humidity, wind speed and feels-like temperature, \
    with temperatures in Celsius.";

pub const GET_FORECAST_TOOL: &str = "get_forecast";
pub const GET_FORECAST_DESCRIPTION: &str = "Get the weather forecast for a location \
    for a number of days (default: 3).";

/// Days forecast when the caller does not say
pub const DEFAULT_FORECAST_DAYS: i32 = 3;

/// Upper bound on forecast lines
pub const MAX_FORECAST_DAYS: i32 = 7;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "weather_agent=info";
