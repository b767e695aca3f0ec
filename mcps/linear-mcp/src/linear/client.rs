//! GraphQL dispatch for the Linear API
//!
//! Exactly one HTTP POST per call. The `{data, errors}` envelope is
//! coerced here so handlers only ever see a `data` payload or a typed
//! error. No retry, no caching, no batching.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::instrument;

use crate::config::Config;

use super::error::{ApiError, LinearError, LinearResult};
use super::transport::{GraphqlTransport, HttpTransport};

/// Client for the Linear GraphQL endpoint.
///
/// Holds no per-call state; clones share the underlying transport.
#[derive(Clone)]
pub struct LinearClient {
    transport: Arc<dyn GraphqlTransport>,
}

impl LinearClient {
    pub fn new(config: &Config) -> LinearResult<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Swap in an alternative transport (tests use a scripted stub).
    pub fn with_transport(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Execute one GraphQL document and return its `data` payload.
    ///
    /// A non-empty top-level `errors` array fails the call even when
    /// `data` is also present, so callers never act on a partial
    /// response.
    #[instrument(skip_all)]
    pub async fn execute(&self, document: &str, variables: Value) -> LinearResult<Value> {
        let body = json!({ "query": document, "variables": variables });
        let envelope = self.transport.post(body).await?;

        if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                return Err(LinearError::Api(parse_errors(errors)));
            }
        }

        match envelope.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(LinearError::Decode(
                "envelope carries neither data nor errors".to_string(),
            )),
        }
    }
}

fn parse_errors(raw: &[Value]) -> Vec<ApiError> {
    raw.iter()
        .map(|entry| ApiError {
            message: entry
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("GraphQL error")
                .to_string(),
            // Path segments may be field names or list indices.
            path: entry.get("path").and_then(Value::as_array).map(|segments| {
                segments
                    .iter()
                    .map(|segment| match segment {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            }),
        })
        .collect()
}
