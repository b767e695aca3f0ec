//! Error constructors for MCP servers

use rmcp::ErrorData as McpError;

/// Create an internal error with a message.
///
/// For failures the caller cannot fix by changing arguments: network
/// problems, remote API errors, response decode mismatches.
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid-params error with a message.
///
/// For tool invocations with missing or malformed arguments.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error() {
        let err = internal_error("test");
        assert!(err.message.contains("test"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("bad param");
        assert!(err.message.contains("bad param"));
    }
}
