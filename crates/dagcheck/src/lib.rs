//! Dagcheck - directed graph acyclicity analysis.
//!
//! This crate takes a pipeline description (a list of nodes and a list of
//! directed edges) and reports how many nodes and edges it has and whether
//! the graph is a DAG.
//!
//! # Example
//!
//! ```
//! use dagcheck::domain::{Edge, Node};
//!
//! let nodes = vec![Node::new("A"), Node::new("B")];
//! let edges = vec![Edge::new("A", "B"), Edge::new("B", "A")];
//!
//! let result = dagcheck::analyze(&nodes, &edges).unwrap();
//! assert_eq!(result.num_nodes, 2);
//! assert!(!result.is_dag);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;

// Public CLI module (needed by binary)
pub mod cli;

pub use analyzer::{analyze, GraphAnalyzer};
pub use config::{AnalyzerConfig, DuplicatePolicy};
pub use domain::{AnalysisResult, Edge, Node, NodeId, Pipeline};
pub use error::{Error, Result};
