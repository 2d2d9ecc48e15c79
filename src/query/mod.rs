//! Query string handling
//!
//! Parses a search query (`path?params`) into an ordered parameter list and
//! rewrites it into the form used by scroll continuation requests.
//!
//! # Overview
//!
//! - `QueryString` - ordered, lossless view of `path?a=1&b`
//! - `ScrollDuration` - the `scroll=<n><unit>` keep-alive token
//! - `continuation_query` - initial search query → continuation query

mod duration;
mod params;
mod transform;

pub use duration::{ScrollDuration, TimeUnit};
pub use params::QueryString;
pub use transform::{
    continuation_query, CONTINUATION_PARAMS, SCROLL_PARAM, SCROLL_PATH, SEARCH_ENDPOINT,
};
