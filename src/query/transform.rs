//! Initial search query → continuation query

use super::duration::ScrollDuration;
use super::params::QueryString;
use crate::error::{Error, Result};

/// Path segment identifying a search endpoint
pub const SEARCH_ENDPOINT: &str = "_search";

/// Index-less scroll continuation endpoint
pub const SCROLL_PATH: &str = "/_search/scroll";

/// Name of the keep-alive parameter
pub const SCROLL_PARAM: &str = "scroll";

/// Parameters that still mean something on a continuation request.
/// `rest_total_hits_as_int` keeps `hits.total` a plain integer.
pub const CONTINUATION_PARAMS: &[&str] = &[SCROLL_PARAM, "rest_total_hits_as_int"];

/// Rewrite a search query into the query used for every continuation fetch.
///
/// Returns the rewritten query together with the parsed keep-alive, which
/// also goes into each continuation body. Applying this to its own output
/// yields the same string.
pub fn continuation_query(query: &str) -> Result<(String, ScrollDuration)> {
    let parsed = QueryString::parse(query);

    let token = parsed.get(SCROLL_PARAM).ok_or_else(|| {
        Error::validation(format!(
            "query '{query}' has no scroll duration, expected e.g. /_search?scroll=30s"
        ))
    })?;
    let duration = ScrollDuration::parse(token)?;

    let mut continuation = parsed.retain_only(CONTINUATION_PARAMS);
    continuation.path = SCROLL_PATH.to_string();

    // A repeated scroll parameter would be ambiguous; keep the one we parsed.
    let mut seen_scroll = false;
    continuation.params.retain(|(name, _)| {
        if name != SCROLL_PARAM {
            return true;
        }
        let first = !seen_scroll;
        seen_scroll = true;
        first
    });

    Ok((continuation.to_string(), duration))
}
