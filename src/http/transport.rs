//! Transport abstraction
//!
//! One request in, one status + body out.

use crate::error::Result;
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;

/// A single request against the search backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Path and query string relative to the host (e.g. `/_search/scroll?scroll=1m`)
    pub path: String,
    /// JSON body; `None` sends no body
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Create a GET request with no body
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// Create a request with a JSON body
    pub fn with_body(method: Method, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            method,
            path: path.into(),
            body: (!body.is_empty()).then_some(body),
        }
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as lossy UTF-8, for diagnostics
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single HTTP call
///
/// Implementations must not retry and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return its status and body
    async fn send(&self, request: TransportRequest) -> Result<RawResponse>;
}
