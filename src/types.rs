//! Common types used throughout escroll
//!
//! The request a session is started from, and the HTTP method it is sent with.

use crate::error::{Error, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used for search calls
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[value(name = "get")]
    GET,
    #[default]
    #[value(name = "post")]
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::POST => f.write_str("POST"),
        }
    }
}

// ============================================================================
// Search Request
// ============================================================================

/// The initial search a scroll session is started from
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Backend host, with or without scheme (e.g. `localhost:9200`)
    pub host: String,
    /// Path and query string (e.g. `/logs/_search?scroll=1m`)
    pub query: String,
    /// Serialized request body, sent untouched with the first fetch
    pub body: Bytes,
    /// Method for the initial and continuation fetches
    pub method: Method,
}

impl SearchRequest {
    /// Create a request with an empty body and the default method
    pub fn new(host: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            query: query.into(),
            body: Bytes::new(),
            method: Method::default(),
        }
    }

    /// Set the request body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Resolve the host into a base URL, defaulting the scheme to `http`
    pub fn base_url(&self) -> Result<Url> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Error::validation("host must not be empty"));
        }

        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        Url::parse(&raw).map_err(|e| Error::validation(format!("invalid host '{host}': {e}")))
    }
}
