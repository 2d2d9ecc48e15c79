//! JSON document writer
//!
//! Provides the sink the CLI hands every emitted hit to.

use crate::error::{Error, Result};
use serde_json::Value;
use std::io::Write;

/// Receives hit documents from the scroll controller
pub trait HitSink {
    /// Accept one document
    fn emit(&mut self, hit: &Value) -> Result<()>;

    /// Flush anything buffered; called once per page
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl HitSink for Vec<Value> {
    fn emit(&mut self, hit: &Value) -> Result<()> {
        self.push(hit.clone());
        Ok(())
    }
}

/// How documents are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// One compact document per line
    #[default]
    Compact,
    /// Indented, one document after another
    Pretty,
}

/// Writes each hit as JSON to any `Write`
pub struct JsonWriter<W: Write> {
    writer: W,
    style: OutputStyle,
    written: u64,
}

impl<W: Write> JsonWriter<W> {
    /// Create a writer with the given style
    pub fn new(writer: W, style: OutputStyle) -> Self {
        Self {
            writer,
            style,
            written: 0,
        }
    }

    /// Documents written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HitSink for JsonWriter<W> {
    fn emit(&mut self, hit: &Value) -> Result<()> {
        match self.style {
            OutputStyle::Compact => serde_json::to_writer(&mut self.writer, hit)?,
            OutputStyle::Pretty => serde_json::to_writer_pretty(&mut self.writer, hit)?,
        }
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::Other(format!("Failed to flush output: {e}")))
    }
}
