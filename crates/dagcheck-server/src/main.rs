//! Dagcheck HTTP server binary.

use clap::Parser;
use dagcheck::DuplicatePolicy;
use dagcheck_server::{DagcheckServer, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Serve pipeline DAG analysis over HTTP
#[derive(Parser, Debug)]
#[command(name = "dagcheck-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "DAGCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (e.g. 0.0.0.0:8000)
    #[arg(short, long, env = "DAGCHECK_BIND")]
    bind: Option<SocketAddr>,

    /// Origin allowed to make cross-origin requests (repeatable, `*` for any)
    #[arg(long = "allowed-origin", env = "DAGCHECK_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "DAGCHECK_MAX_BODY_BYTES")]
    max_body_bytes: Option<u64>,

    /// Fail requests that declare a node id more than once
    #[arg(long)]
    reject_duplicates: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if !self.allowed_origins.is_empty() {
            config.allowed_origins = self.allowed_origins;
        }
        if let Some(max) = self.max_body_bytes {
            config.max_body_bytes = max;
        }
        if self.reject_duplicates {
            config.analyzer.duplicates = DuplicatePolicy::Reject;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Example: RUST_LOG=dagcheck_server=debug,dagcheck=trace,warp=info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(dagcheck::cli::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting dagcheck-server");

    let config = Args::parse().into_config()?;
    let server = DagcheckServer::new(config)?;
    server.run().await?;

    Ok(())
}
