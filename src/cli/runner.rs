//! CLI runner - builds the session from flags and runs it

use crate::cli::commands::Cli;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{JsonWriter, OutputStyle};
use crate::scroll::{ScrollConfig, ScrollController, ScrollSummary};
use crate::types::SearchRequest;
use bytes::Bytes;
use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the scroll, writing documents to stdout
    pub async fn run(&self, cancel: CancellationToken) -> Result<ScrollSummary> {
        let request = self.search_request()?;
        let client = HttpClient::with_config(self.http_config(&request)?)?;

        let style = if self.cli.pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        };
        let mut sink = JsonWriter::new(BufWriter::new(io::stdout()), style);

        ScrollController::new(&client)
            .with_config(self.scroll_config())
            .with_cancellation(cancel)
            .run(&request, &mut sink)
            .await
    }

    /// Assemble the search request from flags
    pub fn search_request(&self) -> Result<SearchRequest> {
        let body = resolve_body(self.cli.file.as_deref(), self.cli.data.as_deref())?;
        Ok(SearchRequest::new(self.cli.host.clone(), self.cli.query.clone())
            .with_body(body)
            .with_method(self.cli.method))
    }

    /// HTTP client settings for the request's host
    pub fn http_config(&self, request: &SearchRequest) -> Result<HttpClientConfig> {
        if self.cli.timeout == 0 {
            return Err(Error::config("--timeout must be at least 1 second"));
        }

        Ok(HttpClientConfig::builder()
            .base_url(request.base_url()?)
            .timeout(Duration::from_secs(self.cli.timeout))
            .build())
    }

    /// Scroll loop settings
    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig::new().with_empty_threshold(self.cli.empty_threshold)
    }
}

/// Pick the request body: the file wins over literal data, neither means empty
pub fn resolve_body(file: Option<&Path>, data: Option<&str>) -> Result<Bytes> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("Reading request body from {}", path.display());
        return Ok(Bytes::from(fs::read(path)?));
    }

    Ok(data.map_or_else(Bytes::new, |data| Bytes::from(data.to_string())))
}
