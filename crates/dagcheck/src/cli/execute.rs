//! Command execution logic.

use anyhow::{Context, Result};
use std::io::Read;

use super::args::AnalyzeArgs;
use super::output::{self, OutputMode};
use crate::analyzer::GraphAnalyzer;
use crate::domain::Pipeline;

/// Execute the analyze command
pub fn execute_analyze(args: &AnalyzeArgs, output_mode: OutputMode) -> Result<()> {
    let config = args.analyzer_config()?;

    let content = match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read pipeline from stdin")?;
            buf
        }
    };

    let pipeline =
        Pipeline::from_json(content.as_bytes()).context("Malformed pipeline document")?;

    tracing::debug!(
        nodes = pipeline.nodes.len(),
        edges = pipeline.edges.len(),
        "Loaded pipeline"
    );

    let result = GraphAnalyzer::new(config).analyze_pipeline(&pipeline)?;
    output::print_result(&result, output_mode)?;

    Ok(())
}
