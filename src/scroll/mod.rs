//! Scroll session module
//!
//! Drives a scroll session from the first search to the terminal page.
//!
//! # Overview
//!
//! The scroll module provides:
//! - `ScrollController` - validate, transform, then fetch/decode/emit until exhausted
//! - `ScrollConfig` - emptiness threshold and page-size fallback
//! - `ScrollState` - cursor and page counters, owned by the running loop
//! - `ScrollSummary` - what a finished session reports

mod controller;
mod types;

pub use controller::ScrollController;
pub use types::{ScrollConfig, ScrollState, ScrollSummary, DEFAULT_EMPTY_THRESHOLD};
