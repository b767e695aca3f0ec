//! Linear MCP Library
//!
//! MCP-compatible tools for Linear issue tracking over its GraphQL API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use linear_mcp::config::Config;
//! use linear_mcp::LinearMcpServer;
//!
//! let config = Config::load()?;
//! let server = LinearMcpServer::new(&config)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Features
//! - Issues: get, list, create, update
//! - Comments: list, create
//! - Projects: get, list, create, update
//! - Cycles: list, get, active
//! - Teams: list, get, workflow states
//! - Users: whoami, list
//! - Labels: list, create
//! - Search: full-text issue search
//! - Attachments: get, lookup by URL, create, update
//! - Compound: issue context, my issues
//!
//! # Requirements
//! - A delegated OAuth access token in `LINEAR_ACCESS_TOKEN`

pub mod config;
pub mod handlers;
pub mod linear;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::LinearMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
