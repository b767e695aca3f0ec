//! MCP Common - Shared utilities for MCP servers
//!
//! Plumbing every server in this workspace needs:
//!
//! - **Initialization**: [`init_tracing`] wires logging to stderr
//!   (stdout is reserved for the MCP protocol)
//! - **Results**: [`json_success`] builds a `CallToolResult` from any
//!   serializable value
//! - **Errors**: [`internal_error`] / [`invalid_params`] build MCP
//!   error payloads without the `ErrorData` ceremony
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_success, CallToolResult, McpError};
//!
//! async fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     let data = fetch_some_data().await?;
//!     json_success(&data)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, invalid_params};
pub use init::init_tracing;
pub use result::json_success;

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
