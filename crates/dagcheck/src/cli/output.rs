//! Output formatting for CLI commands.
//!
//! Results are printed either as human-readable text or as the JSON record
//! returned by the analyzer.

use crate::domain::AnalysisResult;
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Output format selected by the `--json` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Settings that control text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `DAGCHECK_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let disabled = env::var("DAGCHECK_COLOR")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(false);

        Self {
            use_colors: !no_color && !disabled,
        }
    }
}

/// Serialize a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)
}

/// Render an analysis result as text.
pub fn format_result(result: &AnalysisResult, config: OutputConfig) -> String {
    let verdict = if result.is_dag {
        "yes (acyclic)"
    } else {
        "no (cycle detected)"
    };
    let verdict = match (config.use_colors, result.is_dag) {
        (false, _) => verdict.to_string(),
        (true, true) => verdict.green().to_string(),
        (true, false) => verdict.red().bold().to_string(),
    };

    format!(
        "Nodes: {}\nEdges: {}\nDAG:   {}",
        result.num_nodes, result.num_edges, verdict
    )
}

/// Print an analysis result in the requested mode.
pub fn print_result(result: &AnalysisResult, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(result),
        OutputMode::Text => {
            println!("{}", format_result(result, OutputConfig::from_env()));
            Ok(())
        }
    }
}
