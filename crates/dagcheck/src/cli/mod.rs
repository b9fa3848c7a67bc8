//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `analyze`: Analyze a pipeline JSON document and report whether it is a DAG
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! dagcheck analyze pipeline.json
//! cat pipeline.json | dagcheck analyze --json
//! dagcheck analyze pipeline.json --max-nodes 500 --reject-duplicates
//! ```

mod args;
mod execute;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::AnalyzeArgs;
pub use output::{OutputConfig, OutputMode};

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "dagcheck=info,dagcheck_server=info";

/// Dagcheck - directed graph acyclicity checks
///
/// Reads a pipeline made of nodes and edges and reports its node count,
/// edge count, and whether it forms a directed acyclic graph.
#[derive(Parser, Debug)]
#[command(name = "dagcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a pipeline document
    ///
    /// The document is a JSON object with `nodes` (each with an `id`) and
    /// `edges` (each with a `source` and `target`).
    Analyze(AnalyzeArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The output mode selected by global flags
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the parsed command
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or if the
    /// analyzer rejects the graph.
    pub fn execute(&self) -> Result<()> {
        let output_mode = self.output_mode();
        match &self.command {
            Commands::Analyze(args) => execute::execute_analyze(args, output_mode),
        }
    }
}
