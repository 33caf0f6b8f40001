//! Redundant edge selection.
//!
//! Picks the cheapest graph edges that are not already part of a spanning
//! tree so the network can survive link failures. Selection is purely by
//! weight: two chosen edges may back up the same tree edge, so the result is
//! not a k-edge-connectivity guarantee.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Edge, NodeId};

/// Selects up to `k` edges of `all_edges` that are absent from `tree`.
///
/// Membership ignores orientation, so `(a, b)` in the tree excludes every
/// `(a, b)` and `(b, a)` edge of the graph, including parallel copies. The
/// remaining edges are stably sorted by weight (ties keep input order) and the
/// first `min(k, unused)` are returned. Returning fewer than `k` edges is not
/// an error.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, add_redundancy};
///
/// let all = [Edge::new(0, 1, 3), Edge::new(1, 2, 1), Edge::new(0, 2, 2)];
/// let tree = [Edge::new(2, 1, 1), Edge::new(0, 2, 2)];
/// assert_eq!(add_redundancy(&all, &tree, 5), vec![Edge::new(0, 1, 3)]);
/// ```
#[must_use]
pub fn add_redundancy(all_edges: &[Edge], tree: &[Edge], k: usize) -> Vec<Edge> {
    let in_tree: HashSet<(NodeId, NodeId)> = tree.iter().map(Edge::key).collect();

    let mut unused: Vec<Edge> = all_edges
        .iter()
        .filter(|edge| !in_tree.contains(&edge.key()))
        .copied()
        .collect();
    unused.sort_by_key(Edge::weight);

    let available = unused.len();
    unused.truncate(k);
    debug!(requested = k, available, selected = unused.len(), "redundancy selected");
    unused
}
