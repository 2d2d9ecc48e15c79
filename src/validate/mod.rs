//! Session validation
//!
//! Everything that must hold before a scroll session may start. The static
//! checks run first and never touch the network; the liveness probe runs last.

use crate::decode::page_size_hint;
use crate::error::{Error, Result};
use crate::http::{Transport, TransportRequest};
use crate::query::{QueryString, ScrollDuration, SCROLL_PARAM, SEARCH_ENDPOINT};
use crate::types::SearchRequest;
use tracing::{debug, warn};

/// Marker of the bulk delete endpoint, blocked unconditionally
pub const DESTRUCTIVE_MARKER: &str = "delete_by_query";

/// Check a request without any network activity
pub fn check_request(request: &SearchRequest) -> Result<()> {
    if request.query.to_ascii_lowercase().contains(DESTRUCTIVE_MARKER) {
        return Err(Error::policy(format!(
            "query '{}' targets {DESTRUCTIVE_MARKER}, escroll never runs destructive queries",
            request.query
        )));
    }

    let query = QueryString::parse(&request.query);

    let token = query.get(SCROLL_PARAM).ok_or_else(|| {
        Error::validation(format!(
            "query '{}' has no scroll parameter, expected e.g. /_search?scroll=30s",
            request.query
        ))
    })?;
    ScrollDuration::parse(token)?;

    if !query.segments().any(|segment| segment == SEARCH_ENDPOINT) {
        return Err(Error::validation(format!(
            "query path '{}' is not a {SEARCH_ENDPOINT} endpoint",
            query.path
        )));
    }

    if let Some(filter) = query.get("filter_path") {
        check_filter_path(filter)?;
    }

    page_size_hint(&request.body)?;

    Ok(())
}

/// A `filter_path` must keep `hits.total`, progress cannot be estimated otherwise
fn check_filter_path(filter: &str) -> Result<()> {
    let entries: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if !filter_keeps(&entries, "hits.total") {
        return Err(Error::validation(format!(
            "filter_path '{filter}' drops hits.total, which is needed to track progress"
        )));
    }

    if !filter_keeps(&entries, "_scroll_id") {
        warn!("filter_path '{filter}' drops _scroll_id, responses will not decode");
    }

    Ok(())
}

/// Whether the response field at `target` survives the filter.
///
/// Inclusions narrow the response to what they match; with none, everything
/// is kept. Exclusions then remove what they match.
fn filter_keeps(entries: &[&str], target: &str) -> bool {
    let target: Vec<&str> = target.split('.').collect();
    let (exclusions, inclusions): (Vec<&str>, Vec<&str>) =
        entries.iter().copied().partition(|entry| entry.starts_with('-'));

    let included = inclusions.is_empty()
        || inclusions.iter().any(|entry| {
            let pattern: Vec<&str> = entry.split('.').collect();
            covers(&pattern, &target) || reaches_into(&pattern, &target)
        });

    let excluded = exclusions.iter().any(|entry| {
        let pattern: Vec<&str> = entry[1..].split('.').collect();
        covers(&pattern, &target)
    });

    included && !excluded
}

/// The pattern matches `path` itself or one of its ancestors
fn covers(pattern: &[&str], path: &[&str]) -> bool {
    (1..=path.len()).any(|depth| glob_match(pattern, &path[..depth]))
}

/// The pattern selects something nested under `path` (`hits.total.value`)
fn reaches_into(pattern: &[&str], path: &[&str]) -> bool {
    (1..pattern.len()).any(|depth| glob_match(&pattern[..depth], path))
}

/// Segment-wise match: `*` spans one segment, `**` any number of them
fn glob_match(pattern: &[&str], path: &[&str]) -> bool {
    match (pattern.split_first(), path.split_first()) {
        (None, None) => true,
        (Some((&"**", rest)), _) => {
            glob_match(rest, path) || (!path.is_empty() && glob_match(pattern, &path[1..]))
        }
        (Some((segment, rest)), Some((field, fields))) => {
            segment_matches(segment, field) && glob_match(rest, fields)
        }
        _ => false,
    }
}

/// A single segment, where `*` inside it matches any run of characters
fn segment_matches(segment: &str, field: &str) -> bool {
    match segment.split_once('*') {
        None => segment == field,
        Some((head, tail)) => {
            let Some(rest) = field.strip_prefix(head) else {
                return false;
            };
            if tail.is_empty() {
                return true;
            }
            rest.char_indices()
                .map(|(i, _)| &rest[i..])
                .chain(std::iter::once(""))
                .any(|suffix| segment_matches(tail, suffix))
        }
    }
}

/// Probe the backend root; any transport failure or non-2xx is fatal
pub async fn probe<T: Transport + ?Sized>(transport: &T) -> Result<()> {
    let response = transport
        .send(TransportRequest::get("/"))
        .await
        .map_err(|e| Error::connectivity(e.to_string()))?;

    if !response.is_success() {
        return Err(Error::connectivity(format!(
            "liveness probe returned HTTP {}: {}",
            response.status,
            response.body_text()
        )));
    }

    debug!("Backend reachable (HTTP {})", response.status);
    Ok(())
}

/// Full validation: static checks, then the liveness probe
pub async fn validate<T: Transport + ?Sized>(request: &SearchRequest, transport: &T) -> Result<()> {
    check_request(request)?;
    probe(transport).await
}
