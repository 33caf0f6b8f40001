//! Prim's algorithm over adjacency lists and a binary heap.
//!
//! The frontier holds `(weight, sequence, from, to)` entries. The sequence
//! number increases with every push, so equal weights pop in insertion order
//! and results are deterministic. Stale entries whose target is already in
//! the tree are skipped when popped.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Adjacency, Edge, Graph, NodeId, Weight},
};

use super::{MstEngine, SpanningTree};

/// Frontier-growing engine starting from node `0`. Never fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Prim;

impl MstEngine for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        Ok(SpanningTree::new(
            prim_mst(&graph.adjacency()),
            graph.node_count(),
        ))
    }
}

type FrontierEntry = Reverse<(Weight, u64, NodeId, NodeId)>;

struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    sequence: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    fn extend_from(&mut self, adjacency: &Adjacency, in_tree: &[bool], node: NodeId) {
        for &(neighbour, weight) in adjacency.neighbours(node) {
            if in_tree.get(neighbour).copied().unwrap_or(true) {
                continue;
            }
            self.heap
                .push(Reverse((weight, self.sequence, node, neighbour)));
            self.sequence += 1;
        }
    }

    fn pop(&mut self) -> Option<(Weight, NodeId, NodeId)> {
        self.heap
            .pop()
            .map(|Reverse((weight, _, from, to))| (weight, from, to))
    }
}

/// Computes a minimum spanning tree (or forest) with Prim's algorithm.
///
/// Growth starts at node `0`. Every returned edge is oriented from the node
/// already in the tree to the node it adds. For a disconnected graph only
/// the component containing node `0` is spanned.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, Graph, prim_mst};
///
/// let graph = Graph::from_triples(3, &[(1, 0, 5), (1, 2, 1), (2, 0, 2)])
///     .expect("graph is valid");
/// assert_eq!(
///     prim_mst(&graph.adjacency()),
///     vec![Edge::new(0, 2, 2), Edge::new(2, 1, 1)],
/// );
/// ```
#[must_use]
#[instrument(name = "mst.prim", skip_all, fields(nodes = adjacency.node_count()))]
pub fn prim_mst(adjacency: &Adjacency) -> Vec<Edge> {
    let node_count = adjacency.node_count();
    let target = node_count.saturating_sub(1);
    let mut tree = Vec::with_capacity(target.min(adjacency.edge_count()));
    if node_count == 0 {
        return tree;
    }

    let mut in_tree = vec![false; node_count];
    let mut frontier = Frontier::new();
    in_tree[0] = true;
    frontier.extend_from(adjacency, &in_tree, 0);

    while tree.len() < target {
        let Some((weight, from, to)) = frontier.pop() else {
            break;
        };
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        tree.push(Edge::new(from, to, weight));
        frontier.extend_from(adjacency, &in_tree, to);
    }

    if tree.len() < target {
        debug!(
            selected = tree.len(),
            required = target,
            "graph is disconnected; node 0's component spanned only"
        );
    }
    tree
}
