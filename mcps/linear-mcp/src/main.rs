//! Linear MCP Server
//!
//! Exposes Linear's GraphQL API as typed MCP tools for issue tracking.
//!
//! # Configuration
//! Set `LINEAR_ACCESS_TOKEN` (delegated OAuth token) and optionally
//! `LINEAR_API_URL`, or configure in `~/.config/linear-mcp.toml`.
//!
//! # Usage
//!
//! Run directly:
//! ```bash
//! linear-mcp
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "linear": {
//!       "command": "./mcps/linear-mcp/target/release/linear-mcp",
//!       "env": { "LINEAR_ACCESS_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use rmcp::{transport::stdio, ServiceExt};

mod config;
mod handlers;
mod linear;
mod params;
mod server;
mod types;

use config::Config;
use server::LinearMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("linear_mcp")?;

    tracing::info!("Starting Linear MCP Server");

    let config = Config::load()?;
    tracing::info!("Linear endpoint: {}", config.api.url);

    if config.api.token.is_none() {
        // Keep serving; every dispatch reports the missing credential
        // per-tool until the environment provides one.
        tracing::warn!("LINEAR_ACCESS_TOKEN is not set - tool calls will fail until it is provided");
    }

    let server = LinearMcpServer::new(&config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
