//! Meal Nutrition Analyzer (MNA)
//!
//! An MCP server for batch meal nutrition analysis.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod config;
mod mcp;
mod models;
mod nutrition;
mod session;
mod tools;
mod translate;

use config::Config;
use mcp::MnaService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mna=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Read configuration; live mode refuses to start without credentials
    let config = Config::from_env()?;
    eprintln!("Analysis mode: {}", config.mode.name());
    eprintln!("Translator: {}", config.translator.name());

    // Create the MNA service
    let service = MnaService::new(&config)?;

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
