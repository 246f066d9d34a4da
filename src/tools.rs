use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::constants::{
    GET_FORECAST_DESCRIPTION, GET_FORECAST_TOOL, GET_WEATHER_DESCRIPTION, GET_WEATHER_TOOL,
};
use crate::models::{GetForecastRequest, GetWeatherRequest};
use crate::weather::{get_forecast, get_weather};

type Handler = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// What a model sees of a tool: name, description and parameter schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A function a chat agent may invoke, together with its declaration
#[derive(Clone)]
pub struct FunctionTool {
    declaration: ToolDeclaration,
    handler: Handler,
}

impl FunctionTool {
    /// Creates a tool from an untyped JSON handler and an explicit schema
    pub fn new<F>(name: &str, description: &str, parameters: Value, handler: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            declaration: ToolDeclaration {
                name: name.to_string(),
                description: description.to_string(),
                parameters,
            },
            handler: Arc::new(handler),
        }
    }

    /// Creates a tool whose parameter schema is derived from `Args`
    pub fn typed<Args, Output, F>(name: &str, description: &str, f: F) -> Self
    where
        Args: DeserializeOwned + JsonSchema,
        Output: Serialize,
        F: Fn(Args) -> Output + Send + Sync + 'static,
    {
        let parameters = schemars::schema_for!(Args).to_value();
        let tool_name = name.to_string();
        Self::new(name, description, parameters, move |args| {
            let args: Args = serde_json::from_value(args)
                .with_context(|| format!("Invalid arguments for tool {}", tool_name))?;
            Ok(serde_json::to_value(f(args))?)
        })
    }

    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    pub fn description(&self) -> &str {
        &self.declaration.description
    }

    pub fn parameters(&self) -> &Value {
        &self.declaration.parameters
    }

    pub fn declaration(&self) -> &ToolDeclaration {
        &self.declaration
    }

    /// Runs the tool with JSON arguments
    pub fn invoke(&self, args: Value) -> Result<Value> {
        tracing::debug!("Invoking tool {} with {}", self.name(), args);
        (self.handler)(args)
    }
}

impl fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.declaration.name)
            .field("description", &self.declaration.description)
            .finish_non_exhaustive()
    }
}

/// Tool wrapping [`get_weather`]
pub fn get_weather_tool() -> FunctionTool {
    FunctionTool::typed(
        GET_WEATHER_TOOL,
        GET_WEATHER_DESCRIPTION,
        |request: GetWeatherRequest| get_weather(&request.location),
    )
}

/// Tool wrapping [`get_forecast`]
pub fn get_forecast_tool() -> FunctionTool {
    FunctionTool::typed(
        GET_FORECAST_TOOL,
        GET_FORECAST_DESCRIPTION,
        |request: GetForecastRequest| get_forecast(&request.location, request.days),
    )
}

/// Both weather tools, lookup first
pub fn weather_tools() -> Vec<FunctionTool> {
    vec![get_weather_tool(), get_forecast_tool()]
}
