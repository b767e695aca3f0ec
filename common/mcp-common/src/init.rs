//! Server initialization utilities
//!
//! Standardized tracing setup shared by every MCP server in the
//! workspace.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for an MCP server.
///
/// Logs go to stderr because stdout carries the MCP protocol. The
/// filter honors `RUST_LOG`, with a default of `info` for the named
/// crate. Set `LOG_FORMAT=json` for structured output.
///
/// # Arguments
///
/// * `crate_name` - the server crate name as it appears in log
///   targets (e.g. `"linear_mcp"`)
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    // Tracing can only be initialized once per process, so there is
    // nothing meaningful to assert in a unit test here.
}
