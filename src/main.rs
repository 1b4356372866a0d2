//! DateTime MCP Server - Binary Entry Point
//!
//! This is the main entry point for the datetime-server binary.

use datetime_mcp::config::ServerConfig;
use datetime_mcp::server::McpServer;
use datetime_mcp::types::McpResult;
use tracing_subscriber::EnvFilter;

fn main() -> McpResult<()> {
    let config = ServerConfig::from_env();

    // stdout carries protocol frames only, so logs go to stderr
    let filter = match config.log_filter.as_deref() {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Invalid log filter {:?}: {}", directive, e);
            EnvFilter::new("off")
        }),
        None => EnvFilter::new("off"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        name = %config.server_info.name,
        version = %config.server_info.version,
        timezone = config.default_timezone.name(),
        "starting datetime MCP server"
    );

    let server = McpServer::with_config(&config);
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "transport failure");
        return Err(e);
    }
    Ok(())
}
