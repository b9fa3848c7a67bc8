//! Dagcheck CLI binary.

use anyhow::Result;
use dagcheck::cli::{Cli, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Main entry point for the dagcheck CLI.
fn main() -> Result<()> {
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=dagcheck=trace dagcheck analyze pipeline.json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting dagcheck CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    Ok(())
}
