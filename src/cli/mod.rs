//! CLI module
//!
//! Command-line interface: flag parsing, body resolution, and the single
//! place where a failed session becomes an exit status.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{resolve_body, Runner};
