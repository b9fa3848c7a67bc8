//! Index arena built from a node/edge list.
//!
//! Node ids are interned to dense indices in declaration order so the
//! traversal can keep its per-node state in plain vectors.

use crate::config::DuplicatePolicy;
use crate::domain::{Edge, Node, NodeId};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Adjacency lists over interned node indices.
///
/// Only declared nodes get a slot. Edges whose source is undeclared are
/// dropped, and so are targets that are undeclared: neither can take part
/// in a cycle through a declared node.
#[derive(Debug)]
pub(super) struct IndexedGraph<'a> {
    ids: Vec<&'a NodeId>,
    adjacency: Vec<Vec<usize>>,
}

impl<'a> IndexedGraph<'a> {
    /// Intern `nodes` and wire up `edges` between them.
    pub(super) fn build(
        nodes: &'a [Node],
        edges: &[Edge],
        duplicates: DuplicatePolicy,
    ) -> Result<Self> {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(nodes.len());
        let mut ids = Vec::with_capacity(nodes.len());

        for node in nodes {
            if index.contains_key(node.id.as_str()) {
                match duplicates {
                    DuplicatePolicy::Merge => {
                        tracing::debug!(id = %node.id, "Merging duplicate node id");
                        continue;
                    }
                    DuplicatePolicy::Reject => return Err(Error::DuplicateNodeId(node.id.clone())),
                }
            }
            index.insert(node.id.as_str(), ids.len());
            ids.push(&node.id);
        }

        let mut adjacency = vec![Vec::new(); ids.len()];
        let mut dangling = 0usize;
        for edge in edges {
            let (Some(&from), Some(&to)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                dangling += 1;
                continue;
            };
            adjacency[from].push(to);
        }

        if dangling > 0 {
            tracing::debug!(dangling, "Ignoring edges with undeclared endpoints");
        }

        Ok(Self { ids, adjacency })
    }

    /// Number of distinct declared nodes.
    pub(super) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Direct successors of `node`, in edge submission order.
    pub(super) fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Original identifier of an interned node.
    pub(super) fn id(&self, node: usize) -> &NodeId {
        self.ids[node]
    }
}
