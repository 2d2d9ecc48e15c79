//! escroll CLI
//!
//! Drains a scroll query to stdout; logs go to stderr.

use clap::Parser;
use escroll::cli::{Cli, Runner};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping before the next page");
            on_signal.cancel();
        }
    });

    let runner = Runner::new(cli);
    if let Err(e) = runner.run(cancel).await {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}
