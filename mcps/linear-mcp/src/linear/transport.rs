//! HTTP transport for the Linear GraphQL endpoint
//!
//! The trait is the seam between the client and the wire: production
//! code uses the reqwest-backed [`HttpTransport`], tests substitute a
//! scripted stub.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;

use super::error::{LinearError, LinearResult};

/// Transport for one GraphQL request body.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// POST one request body and return the raw response envelope.
    async fn post(&self, body: Value) -> LinearResult<Value>;
}

/// reqwest-backed transport POSTing to the configured endpoint.
///
/// Connection reuse is the HTTP client's concern; this type holds no
/// per-request state.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &Config) -> LinearResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("linear-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(|e| LinearError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.api.url.clone(),
            token: config.api.token.clone(),
        })
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    #[instrument(skip_all)]
    async fn post(&self, body: Value) -> LinearResult<Value> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| LinearError::Auth("LINEAR_ACCESS_TOKEN is not set".to_string()))?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| LinearError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "linear response received");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(LinearError::Auth(format!(
                "API rejected credentials (HTTP {})",
                status.as_u16()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| LinearError::Transport(e.to_string()))?;

        // An error status whose body still parses as a GraphQL envelope
        // is handled by the client's errors-array path, not here.
        match serde_json::from_str::<Value>(&text) {
            Ok(envelope) if envelope.is_object() => Ok(envelope),
            _ if status.is_success() => Err(LinearError::Decode(
                "response body is not a JSON object".to_string(),
            )),
            _ => Err(LinearError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                snippet(&text)
            ))),
        }
    }
}

fn snippet(text: &str) -> String {
    const MAX: usize = 200;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(MAX).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Scripted transport: hands out queued responses in order and
    /// records every request body for inspection.
    pub(crate) struct StubTransport {
        responses: Mutex<VecDeque<LinearResult<Value>>>,
        pub(crate) requests: Mutex<Vec<Value>>,
    }

    impl StubTransport {
        pub(crate) fn new(responses: Vec<LinearResult<Value>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GraphqlTransport for StubTransport {
        async fn post(&self, body: Value) -> LinearResult<Value> {
            self.requests.lock().unwrap().push(body);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(LinearError::Transport("stub exhausted".to_string())))
        }
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "x".repeat(500);
        let s = super::snippet(&long);
        assert!(s.ends_with("..."));
        assert!(s.chars().count() < 250);
    }
}
