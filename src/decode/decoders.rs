//! Page decoding and request body inspection

use super::types::{Page, ScrollResponse};
use crate::error::{Error, Result};
use serde_json::Value;

/// Parse a scroll response body into a [`Page`]
pub fn decode_page(body: &[u8]) -> Result<Page> {
    let response: ScrollResponse = serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse scroll response: {e}"),
    })?;

    let total = match response.hits.total {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_total(&value)?),
    };

    Ok(Page {
        scroll_id: response.scroll_id,
        total,
        hits: response.hits.hits.into_iter().map(|hit| hit.source).collect(),
    })
}

fn parse_total(value: &Value) -> Result<u64> {
    let count = match value {
        Value::Object(map) => map.get("value").and_then(Value::as_u64),
        other => other.as_u64(),
    };
    count.ok_or_else(|| Error::decode(format!("hits.total is not a hit count: {value}")))
}

/// Read the explicit `size` from the initial request body.
///
/// An empty body or a body without `size` yields `Ok(None)`. A body that is
/// not a JSON object, or a `size` that is not a positive integer, is rejected.
pub fn page_size_hint(body: &[u8]) -> Result<Option<u64>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::validation(format!("request body is not valid JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(Error::validation("request body must be a JSON object"));
    };

    match map.get("size") {
        None | Some(Value::Null) => Ok(None),
        Some(size) => match size.as_u64() {
            Some(n) if n > 0 => Ok(Some(n)),
            _ => Err(Error::validation(format!(
                "request body size must be a positive integer, got {size}"
            ))),
        },
    }
}
