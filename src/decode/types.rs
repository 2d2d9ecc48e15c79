//! Decoder types
//!
//! The decoded page plus the wire envelope it is read from.

use serde::Deserialize;
use serde_json::Value;

/// Page size assumed when the request body does not set `size`
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One batch of hits returned by a single fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Cursor to present on the next continuation request
    pub scroll_id: String,
    /// Total matching documents, when the backend reports it
    pub total: Option<u64>,
    /// Hit documents (`_source`), in arrival order
    pub hits: Vec<Value>,
}

impl Page {
    /// Number of hits on this page
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the page carries no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

// ============================================================================
// Wire envelope
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct ScrollResponse {
    #[serde(rename = "_scroll_id")]
    pub(super) scroll_id: String,
    pub(super) hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitsEnvelope {
    /// Integer, or `{"value": n, "relation": "eq"}` on newer backends
    #[serde(default)]
    pub(super) total: Option<Value>,
    pub(super) hits: Vec<HitEnvelope>,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitEnvelope {
    #[serde(rename = "_source")]
    pub(super) source: Value,
}
