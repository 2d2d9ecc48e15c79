//! Scroll types
//!
//! Configuration, per-session state and the final summary.

use crate::decode::DEFAULT_PAGE_SIZE;
use crate::progress::{expected_pages, ProgressSnapshot};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// A page with this many hits or fewer ends the session
pub const DEFAULT_EMPTY_THRESHOLD: usize = 4;

/// Configuration for a scroll session
#[derive(Debug, Clone)]
pub struct ScrollConfig {
    /// Pages with at most this many hits are terminal
    pub empty_threshold: usize,
    /// Page size assumed when the request body has no `size`
    pub default_page_size: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            empty_threshold: DEFAULT_EMPTY_THRESHOLD,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ScrollConfig {
    /// Create a new scroll config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emptiness threshold
    #[must_use]
    pub fn with_empty_threshold(mut self, threshold: usize) -> Self {
        self.empty_threshold = threshold;
        self
    }

    /// Set the fallback page size
    #[must_use]
    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }

    /// Whether a page with `hits` documents ends the session
    pub fn is_terminal(&self, hits: usize) -> bool {
        hits <= self.empty_threshold
    }
}

/// Mutable state of one running scroll
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Cursor for the next continuation request
    pub scroll_id: String,
    /// Hits per page
    pub page_size: u64,
    /// Index of the page being fetched, 1 for the initial search
    pub page: u64,
    /// Pages expected in total, when the backend reported a hit count
    pub pages_expected: Option<u64>,
    /// Total hits reported by the backend
    pub total_hits: Option<u64>,
    /// Hits handed to the sink so far
    pub hits_emitted: u64,
    /// Monotonic session start
    pub started: Instant,
    /// Wall-clock session start
    pub started_at: DateTime<Utc>,
}

impl ScrollState {
    /// Initialize from the first decoded page
    pub fn init(
        scroll_id: String,
        page_size: u64,
        total_hits: Option<u64>,
        started: Instant,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            scroll_id,
            page_size,
            page: 1,
            pages_expected: total_hits.map(|total| expected_pages(total, page_size)),
            total_hits,
            hits_emitted: 0,
            started,
            started_at,
        }
    }

    /// Move to the next page with a fresh cursor
    pub fn advance(&mut self, scroll_id: String) {
        self.scroll_id = scroll_id;
        self.page += 1;
    }

    /// Pages fully fetched and emitted
    pub fn pages_completed(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Progress as of now
    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(
            self.started.elapsed(),
            self.pages_completed(),
            self.pages_expected,
        )
    }

    /// Close the session
    pub fn finish(self) -> ScrollSummary {
        ScrollSummary {
            pages: self.pages_completed(),
            hits: self.hits_emitted,
            total_hits: self.total_hits,
            started_at: self.started_at,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Outcome of a completed scroll session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSummary {
    /// Pages emitted
    pub pages: u64,
    /// Hits emitted
    pub hits: u64,
    /// Total hits reported by the backend
    pub total_hits: Option<u64>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// How long it ran
    pub elapsed: Duration,
}
