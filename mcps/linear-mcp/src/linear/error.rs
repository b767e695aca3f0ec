//! Error types for Linear GraphQL operations

use thiserror::Error;

/// One entry from a GraphQL `errors` array, with the response path
/// the remote attached to it.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub path: Option<Vec<String>>,
}

/// Errors that can occur when dispatching Linear GraphQL operations
#[derive(Error, Debug)]
pub enum LinearError {
    /// Caller arguments failed validation; nothing was sent over the wire
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// No token configured, or the API rejected the one presented
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network failure, timeout, or an HTTP error with no parseable
    /// GraphQL envelope
    #[error("transport failure: {0}")]
    Transport(String),

    /// The API returned a GraphQL error envelope
    #[error("Linear API error: {}", summarize(.0))]
    Api(Vec<ApiError>),

    /// The response did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

fn summarize(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no detail provided".to_string();
    }
    errors
        .iter()
        .map(|e| match &e.path {
            Some(path) if !path.is_empty() => format!("{} (at {})", e.message, path.join(".")),
            _ => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for Linear operations
pub type LinearResult<T> = Result<T, LinearError>;
