//! CLI arguments

use crate::scroll::DEFAULT_EMPTY_THRESHOLD;
use crate::types::Method;
use clap::Parser;
use std::path::PathBuf;

/// Drain an Elasticsearch scroll query to stdout, one document per hit
#[derive(Parser, Debug)]
#[command(name = "escroll")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search backend host and port
    #[arg(short = 'H', long, default_value = "localhost:9200")]
    pub host: String,

    /// Index path and query string; must include scroll=<duration>
    #[arg(short, long, default_value = "/_search?scroll=1m")]
    pub query: String,

    /// Request body, same as curl -d
    #[arg(short, long)]
    pub data: Option<String>,

    /// File holding the request body; takes precedence over --data
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Pretty-print documents instead of one per line
    #[arg(short, long)]
    pub pretty: bool,

    /// HTTP method for search requests
    #[arg(short = 'X', long, value_enum, default_value = "post")]
    pub method: Method,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Pages with this many hits or fewer end the scroll
    #[arg(long, default_value_t = DEFAULT_EMPTY_THRESHOLD)]
    pub empty_threshold: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
