//! Weather tools and a chat agent configured to use them
//!
//! [`weather::get_weather`] and [`weather::get_forecast`] serve simulated
//! data; [`agent::weather_agent`] bundles them as [`tools::FunctionTool`]s
//! with a caller-supplied [`agent::ChatClient`]. [`service::WeatherService`]
//! exposes the same tools over MCP.

pub mod agent;
pub mod constants;
pub mod formatters;
pub mod logging;
pub mod models;
pub mod service;
pub mod tools;
pub mod weather;

pub use agent::{weather_agent, ChatAgent, ChatClient};
pub use models::WeatherRecord;
pub use tools::{FunctionTool, ToolDeclaration};
pub use weather::{get_forecast, get_weather};
