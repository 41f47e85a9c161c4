//! Binary crate for the `venlo` weather dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive menu and configuration
//! - Rendering the core's tables as terminal text

use clap::Parser;

mod chart;
mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("venlo=warn,venlo_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
