//! Output module
//!
//! Where emitted hit documents go.
//!
//! # Overview
//!
//! - `HitSink` - receives one document per hit, in arrival order
//! - `JsonWriter` - writes documents as compact JSON lines or pretty JSON

mod writer;

pub use writer::{HitSink, JsonWriter, OutputStyle};

#[cfg(test)]
mod tests;
