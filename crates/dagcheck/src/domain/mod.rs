//! Domain types for graph analysis.
//!
//! A [`Pipeline`] is the graph submitted for one analysis: an ordered list of
//! [`Node`]s and an ordered list of [`Edge`]s. It is transient and carries no
//! identity beyond the call that analyzes it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a node, unique within one analysis request
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A declared node in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier
    pub id: NodeId,
}

impl Node {
    /// Create a node with the given identifier
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

/// A directed edge between two node identifiers
///
/// Neither endpoint has to reference a declared node. Edges with an undeclared
/// endpoint are tolerated and can never take part in a detected cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the node the edge leaves
    pub source: NodeId,

    /// Identifier of the node the edge enters
    pub target: NodeId,
}

impl Edge {
    /// Create an edge from `source` to `target`
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Nodes and edges submitted together for a single analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Declared nodes, in submission order
    pub nodes: Vec<Node>,

    /// Edges, in submission order
    pub edges: Vec<Edge>,
}

impl Pipeline {
    /// Create a pipeline from node and edge lists
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse a pipeline from a JSON document
    ///
    /// Unknown fields are ignored. A node without an `id`, an edge without a
    /// `source` or `target`, or a non-string id fails with
    /// [`Error::Json`](crate::Error::Json).
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Outcome of analyzing a [`Pipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of submitted nodes, duplicates included
    pub num_nodes: usize,

    /// Number of submitted edges, dangling ones included
    pub num_edges: usize,

    /// Whether the declared nodes form a directed acyclic graph
    pub is_dag: bool,
}
