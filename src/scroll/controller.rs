//! Scroll loop controller
//!
//! INIT → FETCH → DECODE → EMIT → {CONTINUE | TERMINATE}. The first page and
//! every continuation go through the same fetch/decode path; only the
//! endpoint and body differ.

use super::types::{ScrollConfig, ScrollState, ScrollSummary};
use crate::decode::{decode_page, page_size_hint, Page};
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest};
use crate::output::HitSink;
use crate::progress::Clock;
use crate::query::continuation_query;
use crate::types::SearchRequest;
use crate::validate::validate;
use chrono::Utc;
use serde_json::json;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Runs one scroll session at a time against a transport
pub struct ScrollController<'a, T: Transport + ?Sized> {
    transport: &'a T,
    config: ScrollConfig,
    cancel: CancellationToken,
}

impl<'a, T: Transport + ?Sized> ScrollController<'a, T> {
    /// Create a controller with default configuration
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            config: ScrollConfig::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Set scroll configuration
    #[must_use]
    pub fn with_config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop the session when this token is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Validate the request, then drain the scroll into `sink`.
    ///
    /// Any failure ends the session; nothing is retried.
    pub async fn run<S: HitSink + ?Sized>(
        &self,
        request: &SearchRequest,
        sink: &mut S,
    ) -> Result<ScrollSummary> {
        validate(request, self.transport).await?;

        let (continuation, keep_alive) = continuation_query(&request.query)?;
        let page_size = match page_size_hint(&request.body)? {
            Some(size) => size,
            None => {
                warn!(
                    "Request body has no size, assuming {} hits per page",
                    self.config.default_page_size
                );
                self.config.default_page_size
            }
        };
        info!(
            "Starting scroll: {} {} (keep-alive {keep_alive}, page size {page_size})",
            request.method, request.query
        );

        let started = Instant::now();
        let started_at = Utc::now();
        let first = self
            .fetch(TransportRequest::with_body(
                request.method,
                request.query.clone(),
                request.body.clone(),
            ))
            .await?;

        let mut state = ScrollState::init(
            first.scroll_id.clone(),
            page_size,
            first.total,
            started,
            started_at,
        );
        match (state.total_hits, state.pages_expected) {
            (Some(total), Some(pages)) => info!("{total} hits to fetch in about {pages} pages"),
            _ => warn!("Backend reported no hit total, progress estimates disabled"),
        }

        let mut page = first;
        loop {
            if self.config.is_terminal(page.len()) {
                if !page.is_empty() {
                    warn!(
                        "Page {} has {} hits (threshold {}), ending scroll without emitting them",
                        state.page,
                        page.len(),
                        self.config.empty_threshold
                    );
                }
                break;
            }

            for hit in &page.hits {
                sink.emit(hit)?;
            }
            sink.flush()?;
            state.hits_emitted += page.len() as u64;

            state.advance(page.scroll_id);
            info!("{}", state.progress());

            let body = json!({
                "scroll": keep_alive.to_string(),
                "scroll_id": state.scroll_id,
            });
            page = self
                .fetch(TransportRequest::with_body(
                    request.method,
                    continuation.clone(),
                    body.to_string(),
                ))
                .await?;
        }

        let summary = state.finish();
        info!(
            "Scroll complete: {} pages, {} hits in {}",
            summary.pages,
            summary.hits,
            Clock::from(summary.elapsed)
        );
        Ok(summary)
    }

    /// FETCH + DECODE for one page
    async fn fetch(&self, request: TransportRequest) -> Result<Page> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!("Fetching {} {}", request.method, request.path);
        let response = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(Error::Cancelled),
            result = self.transport.send(request) => {
                result.map_err(|e| Error::fetch_transport(e.to_string()))?
            }
        };

        if !response.is_success() {
            return Err(Error::fetch_status(
                response.status,
                response.body_text(),
            ));
        }

        decode_page(&response.body)
    }
}
