//! HTTP transport module
//!
//! Performs exactly one HTTP call per request and hands back the status and
//! raw body. Status interpretation is left to the caller.
//!
//! # Features
//!
//! - **Transport trait**: the seam the scroll controller and validator talk to
//! - **Explicit timeouts**: every request carries a configurable timeout
//! - **No retries**: a scroll cursor is single-use, replaying a fetch is unsafe

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::{RawResponse, Transport, TransportRequest};

#[cfg(test)]
pub(crate) mod mock;
