//! Cycle detection over submitted pipelines.
//!
//! [`GraphAnalyzer`] turns a node/edge list into an [`AnalysisResult`]:
//!
//! 1. Size guards from [`AnalyzerConfig`] are checked against the raw input.
//! 2. Node ids are interned into an index arena (`indexed`). Edges are
//!    wired up only when both endpoints are declared.
//! 3. A three-color depth-first search (`traversal`) walks from every
//!    unvisited node. Reaching a node that is still on the active path is a
//!    back-edge, and one back-edge is enough to report `is_dag = false`.
//!
//! The analyzer holds nothing but its configuration. Each call builds and
//! drops its own arena, so one instance can be shared across threads freely.

mod indexed;
mod traversal;

use crate::config::AnalyzerConfig;
use crate::domain::{AnalysisResult, Edge, Node, Pipeline};
use crate::error::{Error, Result};
use indexed::IndexedGraph;

/// Determines node count, edge count and acyclicity of a graph.
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyzer {
    config: AnalyzerConfig,
}

impl GraphAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The configuration this analyzer enforces.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a graph given as separate node and edge lists.
    ///
    /// Edges may reference ids that are not declared in `nodes`. Such edges
    /// are counted in `num_edges` but never contribute to a cycle.
    ///
    /// # Errors
    ///
    /// - [`Error::GraphTooLarge`] if the input exceeds `max_nodes` or `max_edges`
    /// - [`Error::DuplicateNodeId`] if a node id repeats and duplicates are rejected
    pub fn analyze(&self, nodes: &[Node], edges: &[Edge]) -> Result<AnalysisResult> {
        self.check_limits(nodes.len(), edges.len())?;

        let graph = IndexedGraph::build(nodes, edges, self.config.duplicates)?;
        let back_edge = traversal::find_back_edge(&graph);

        if let Some((from, to)) = back_edge {
            tracing::trace!(from = %graph.id(from), to = %graph.id(to), "Cycle detected");
        }

        let result = AnalysisResult {
            num_nodes: nodes.len(),
            num_edges: edges.len(),
            is_dag: back_edge.is_none(),
        };

        tracing::debug!(
            num_nodes = result.num_nodes,
            num_edges = result.num_edges,
            is_dag = result.is_dag,
            "Analyzed graph"
        );

        Ok(result)
    }

    /// Analyze a [`Pipeline`].
    ///
    /// # Errors
    ///
    /// Same as [`GraphAnalyzer::analyze`].
    pub fn analyze_pipeline(&self, pipeline: &Pipeline) -> Result<AnalysisResult> {
        self.analyze(&pipeline.nodes, &pipeline.edges)
    }

    fn check_limits(&self, num_nodes: usize, num_edges: usize) -> Result<()> {
        let guards = [
            ("nodes", num_nodes, self.config.max_nodes),
            ("edges", num_edges, self.config.max_edges),
        ];

        for (kind, count, limit) in guards {
            if let Some(limit) = limit {
                if count > limit {
                    tracing::warn!(kind, count, limit, "Rejecting oversized graph");
                    return Err(Error::GraphTooLarge { kind, count, limit });
                }
            }
        }

        Ok(())
    }
}

/// Analyze a graph with the default size guards.
///
/// # Errors
///
/// Returns [`Error::GraphTooLarge`] if the input exceeds the default limits.
pub fn analyze(nodes: &[Node], edges: &[Edge]) -> Result<AnalysisResult> {
    GraphAnalyzer::default().analyze(nodes, edges)
}
