use anyhow::Result;
use rmcp::ServiceExt;
use weather_agent::{logging, service::WeatherService};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!("Starting weather MCP server");

    let server = WeatherService::new().serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
