//! # escroll
//!
//! Drains large result sets out of an Elasticsearch-compatible backend
//! through its scroll API and streams every hit document to a sink.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use escroll::http::{HttpClient, HttpClientConfig};
//! use escroll::scroll::ScrollController;
//! use escroll::{Result, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let request = SearchRequest::new("localhost:9200", "/logs/_search?scroll=1m")
//!         .with_body(r#"{"size": 1000, "query": {"match_all": {}}}"#);
//!
//!     let config = HttpClientConfig::builder().base_url(request.base_url()?).build();
//!     let client = HttpClient::with_config(config)?;
//!
//!     let mut docs: Vec<serde_json::Value> = Vec::new();
//!     let summary = ScrollController::new(&client).run(&request, &mut docs).await?;
//!     println!("{} hits over {} pages", summary.hits, summary.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  validate ──► query::continuation_query ──► ScrollController loop
//!                                              │
//!            ┌──────────────┬──────────────┬──┴───────────┬──────────────┐
//!            │  Transport   │   decode     │  progress    │  HitSink     │
//!            │  (one call)  │  (Page)      │  (ETA)       │  (emit)      │
//!            └──────────────┴──────────────┴──────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Query string parsing and continuation rewrite
pub mod query;

/// Pre-flight request checks and liveness probe
pub mod validate;

/// HTTP transport
pub mod http;

/// Scroll response decoding
pub mod decode;

/// Remaining-time estimation
pub mod progress;

/// Hit document sinks
pub mod output;

/// Scroll session controller
pub mod scroll;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::{Method, SearchRequest};
