//! Response decoder module
//!
//! Turns raw scroll response bytes into a typed [`Page`], and reads the
//! page-size hint from the initial request body.
//!
//! # Overview
//!
//! Hit documents are carried as untyped `serde_json::Value`s. The crate
//! enables `preserve_order` and `arbitrary_precision` so a document leaves
//! exactly as it arrived: same key order, same numeric literals.

mod decoders;
mod types;

pub use decoders::{decode_page, page_size_hint};
pub use types::{Page, DEFAULT_PAGE_SIZE};
