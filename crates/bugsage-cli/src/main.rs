//! Bugsage CLI - AI error debugging assistant
//!
//! Analyzes a captured error message with an AI completion endpoint and
//! Stack Overflow search, then drives a follow-up chat loop.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod input;
mod output;

use commands::Cli;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bugsage=info".into());

    // Logs go to stderr so piped stdout stays clean display output.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    cli.execute().await
}
