use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::constants::{AGENT_INSTRUCTIONS, SERVER_NAME};
use crate::models::{GetForecastRequest, GetWeatherRequest};
use crate::weather::{get_forecast, get_weather};

/// MCP server exposing the weather tools as backend tools
#[derive(Clone)]
pub struct WeatherService {
    tool_router: ToolRouter<Self>,
}

impl WeatherService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for WeatherService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(AGENT_INSTRUCTIONS.to_string()),
        }
    }
}

#[tool_router]
impl WeatherService {
    /// Gets the current weather for a location
    #[tool(
        description = "Get the current weather for a location. \
    Returns temperature, conditions, humidity, wind speed and feels-like temperature, \
    with temperatures in Celsius."
    )]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let record = get_weather(&request.location);

        let formatted = serde_json::to_string(&record).map_err(|e| {
            McpError::internal_error(format!("Failed to encode weather data: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets the weather forecast for a location
    #[tool(
        description = "Get the weather forecast for a location \
    for a number of days (default: 3)."
    )]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let forecast = get_forecast(&request.location, request.days);

        Ok(CallToolResult::success(vec![Content::text(forecast)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GET_FORECAST_DESCRIPTION, GET_WEATHER_DESCRIPTION};

    #[test]
    fn server_info_names_the_service() {
        let info = WeatherService::new().get_info();
        assert_eq!(info.server_info.name, "weather-agent");
        assert_eq!(info.instructions.as_deref(), Some(AGENT_INSTRUCTIONS));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn advertised_descriptions_match_tool_constants() {
        let tools = WeatherService::new().tool_router.list_all();
        let description = |name: &str| {
            tools
                .iter()
                .find(|tool| tool.name == name)
                .and_then(|tool| tool.description.as_deref().map(str::to_string))
        };

        assert_eq!(tools.len(), 2);
        assert_eq!(
            description("get_weather").as_deref(),
            Some(GET_WEATHER_DESCRIPTION)
        );
        assert_eq!(
            description("get_forecast").as_deref(),
            Some(GET_FORECAST_DESCRIPTION)
        );
    }

    fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        result.content[0]
            .as_text()
            .map(|content| content.text.clone())
            .unwrap()
    }

    #[tokio::test]
    async fn get_weather_tool_returns_record_json() {
        let service = WeatherService::new();
        let result = service
            .get_weather(Parameters(GetWeatherRequest {
                location: "SEATTLE".to_string(),
            }))
            .await
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "temperature": 11,
                "conditions": "rainy",
                "humidity": 75,
                "wind_speed": 12,
                "feels_like": 10
            })
        );
    }

    #[tokio::test]
    async fn get_forecast_tool_caps_days() {
        let service = WeatherService::new();
        let result = service
            .get_forecast(Parameters(GetForecastRequest {
                location: "Paris".to_string(),
                days: 10,
            }))
            .await
            .unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("10-day forecast for Paris:\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("Day ")).count(), 7);
    }
}
