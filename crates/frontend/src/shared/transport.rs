//! Network seam of the action dispatcher

use std::fmt;

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// Fully resolved request of one dispatch.
///
/// A body is always sent as `application/json`; `None` sends an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Status and body text, read whatever the status is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("unexpected response (HTTP {status}): {reason}")]
    MalformedBody { status: u16, reason: String },
}

/// Issues action requests. Single-threaded: futures need not be `Send`.
#[async_trait(?Send)]
pub trait ActionTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, TransportError>;
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Default)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl ActionTransport for GlooTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawResponse, TransportError> {
        let url = api_url(&self.base_url, &request.path);

        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| TransportError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
