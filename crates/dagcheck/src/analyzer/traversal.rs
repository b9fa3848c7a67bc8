//! Three-color depth-first search for cycle detection.
//!
//! The walk uses an explicit stack of `(node, next neighbor position)` frames
//! instead of recursion, so input depth is bounded by heap memory rather than
//! the thread's call stack.

use super::indexed::IndexedGraph;

/// Traversal state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not reached yet
    Unvisited,
    /// On the active DFS path
    InProgress,
    /// Fully explored, no cycle reachable from here
    Done,
}

/// Find an edge closing a cycle, if any.
///
/// Returns the first back-edge `(from, to)` encountered, where `to` is on the
/// active path when `from` examines it. Roots are tried in index order and
/// every still-unvisited node starts a new walk, so disconnected components
/// are all covered.
pub(super) fn find_back_edge(graph: &IndexedGraph<'_>) -> Option<(usize, usize)> {
    let mut color = vec![Color::Unvisited; graph.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.len() {
        if color[root] != Color::Unvisited {
            continue;
        }

        color[root] = Color::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, position) = *frame;

            let Some(&next) = graph.neighbors(node).get(position) else {
                color[node] = Color::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color[next] {
                Color::InProgress => return Some((node, next)),
                Color::Unvisited => {
                    color[next] = Color::InProgress;
                    stack.push((next, 0));
                }
                Color::Done => {}
            }
        }
    }

    None
}
