//! Analyzer configuration.
//!
//! Configuration is read from YAML, for example:
//!
//! ```yaml
//! max-nodes: 100000
//! max-edges: 1000000
//! duplicates: reject
//! ```
//!
//! Every key is optional. Setting a limit to `null` disables it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum number of nodes accepted for one analysis
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Default maximum number of edges accepted for one analysis
pub const DEFAULT_MAX_EDGES: usize = 1_000_000;

/// How repeated node ids in one request are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Repeated ids collapse onto the first declaration
    #[default]
    Merge,

    /// Repeated ids fail the analysis with [`Error::DuplicateNodeId`]
    Reject,
}

/// Size guards and input policy for [`GraphAnalyzer`](crate::GraphAnalyzer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Maximum number of submitted nodes, `None` for unlimited
    pub max_nodes: Option<usize>,

    /// Maximum number of submitted edges, `None` for unlimited
    pub max_edges: Option<usize>,

    /// Handling of repeated node ids
    pub duplicates: DuplicatePolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(DEFAULT_MAX_NODES),
            max_edges: Some(DEFAULT_MAX_EDGES),
            duplicates: DuplicatePolicy::Merge,
        }
    }
}

impl AnalyzerConfig {
    /// Configuration with no size guards
    pub fn unlimited() -> Self {
        Self {
            max_nodes: None,
            max_edges: None,
            duplicates: DuplicatePolicy::Merge,
        }
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Reject limits that could never admit a graph.
    pub fn validate(&self) -> Result<()> {
        for (key, limit) in [("max-nodes", self.max_nodes), ("max-edges", self.max_edges)] {
            if limit == Some(0) {
                return Err(Error::Config(format!(
                    "{key} must be at least 1 (use null to disable the limit)"
                )));
            }
        }
        Ok(())
    }
}
