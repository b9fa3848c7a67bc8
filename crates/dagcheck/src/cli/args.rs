//! CLI argument structs.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{AnalyzerConfig, DuplicatePolicy};
use crate::error::Result;

/// Arguments for the `analyze` command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Pipeline JSON file to analyze
    ///
    /// Reads from standard input when omitted or `-`.
    pub input: Option<PathBuf>,

    /// YAML file with analyzer limits
    #[arg(short, long, env = "DAGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of nodes to accept
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_nodes: Option<u64>,

    /// Maximum number of edges to accept
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_edges: Option<u64>,

    /// Fail when a node id is declared more than once
    #[arg(long)]
    pub reject_duplicates: bool,
}

impl AnalyzeArgs {
    /// Input path, or `None` for standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Build the analyzer configuration from the config file and flag overrides
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::load(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(max) = self.max_nodes {
            config.max_nodes = Some(usize::try_from(max).unwrap_or(usize::MAX));
        }
        if let Some(max) = self.max_edges {
            config.max_edges = Some(usize::try_from(max).unwrap_or(usize::MAX));
        }
        if self.reject_duplicates {
            config.duplicates = DuplicatePolicy::Reject;
        }

        Ok(config)
    }
}
