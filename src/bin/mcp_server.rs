//! MCP Server binary entry point
//!
//! Run with: cargo run --bin rhythmic-ribbon-mcp -- --help

use clap::Parser;
use rhythmic_ribbon_mcp::config::Cli;
use rhythmic_ribbon_mcp::mcp::RibbonService;
use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout is for MCP protocol)
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Rhythmic Ribbon MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.into_server_config()?;
    let service = RibbonService::from_config(&config)?;

    info!(
        tools = service.tool_names().len(),
        synthesis = service.synthesis_enabled(),
        "Serving over stdio"
    );

    // Create the service and serve via stdio
    let running = service.serve(stdio()).await?;

    info!("MCP server running, waiting for requests...");

    // Wait for shutdown
    running.waiting().await?;

    info!("MCP server shutting down");
    Ok(())
}
