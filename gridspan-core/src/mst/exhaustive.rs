//! Exhaustive subset search.
//!
//! Every subset of exactly `n - 1` edges is tested for the spanning-tree
//! property and the lightest one wins. Subsets are `u64` bitmasks where bit
//! `j` selects edge `j`; masks are visited in increasing numeric order, so
//! the first minimum found is the one with the smallest mask.

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Edge, Graph, WeightSum},
    union_find::DisjointSet,
};

use super::{MstEngine, SpanningTree};

/// Default number of edges exhaustive search will accept.
pub const DEFAULT_EXHAUSTIVE_EDGE_LIMIT: usize = 24;

/// Largest edge count a `u64` subset mask can enumerate.
pub const MAX_EXHAUSTIVE_EDGE_LIMIT: usize = 63;

/// Brute-force reference engine.
///
/// Costs `O(C(m, n-1) * n)` time, so it refuses graphs with more edges than
/// its configured limit.
///
/// # Examples
/// ```
/// use gridspan_core::{ExhaustiveSearch, Graph, MstEngine};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 2)])
///     .expect("graph is valid");
/// let tree = ExhaustiveSearch::default()
///     .spanning_tree(&graph)
///     .expect("graph is within the edge limit");
/// assert_eq!(tree.total_weight(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExhaustiveSearch {
    edge_limit: usize,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self {
            edge_limit: DEFAULT_EXHAUSTIVE_EDGE_LIMIT,
        }
    }
}

impl ExhaustiveSearch {
    /// Creates an engine that accepts graphs with up to `edge_limit` edges.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidEdgeLimit`] when `edge_limit` exceeds
    /// [`MAX_EXHAUSTIVE_EDGE_LIMIT`].
    pub const fn with_edge_limit(edge_limit: usize) -> Result<Self, MstError> {
        if edge_limit > MAX_EXHAUSTIVE_EDGE_LIMIT {
            return Err(MstError::InvalidEdgeLimit {
                requested: edge_limit,
                max: MAX_EXHAUSTIVE_EDGE_LIMIT,
            });
        }
        Ok(Self { edge_limit })
    }

    /// Returns the configured edge limit.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_limit(&self) -> usize { self.edge_limit }

    /// Finds the minimum-weight spanning tree, or `None` when none exists.
    ///
    /// A single-node graph yields `Some` of an empty edge list. Graphs with
    /// fewer than `n - 1` edges, or whose edges do not connect every node,
    /// yield `None`.
    ///
    /// # Errors
    /// Returns [`MstError::ExhaustiveLimitExceeded`] when the graph has more
    /// edges than the configured limit.
    #[instrument(
        name = "mst.exhaustive",
        err,
        skip_all,
        fields(nodes = graph.node_count(), edges = graph.edge_count(), limit = self.edge_limit),
    )]
    pub fn search(&self, graph: &Graph) -> Result<Option<Vec<Edge>>, MstError> {
        let edges = graph.edges();
        let target = graph.spanning_edge_count();

        if target == 0 {
            return Ok(Some(Vec::new()));
        }
        if edges.len() < target {
            debug!(required = target, "too few edges for a spanning tree");
            return Ok(None);
        }
        if edges.len() > self.edge_limit {
            return Err(MstError::ExhaustiveLimitExceeded {
                edges: edges.len(),
                limit: self.edge_limit,
            });
        }

        let end = 1_u64 << edges.len();
        let mut mask = (1_u64 << target) - 1;
        let mut best: Option<(WeightSum, u64)> = None;
        let mut evaluated: u64 = 0;

        while mask < end {
            evaluated += 1;
            if let Some(weight) = spanning_weight(graph.node_count(), edges, mask) {
                if best.is_none_or(|(best_weight, _)| weight < best_weight) {
                    best = Some((weight, mask));
                }
            }
            mask = next_subset(mask);
        }

        debug!(evaluated, found = best.is_some(), "exhaustive search completed");
        Ok(best.map(|(_, mask)| select(edges, mask).copied().collect()))
    }
}

impl MstEngine for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let edges = self.search(graph)?.unwrap_or_default();
        Ok(SpanningTree::new(edges, graph.node_count()))
    }
}

/// Computes the minimum spanning tree by exhaustive subset search.
///
/// Uses [`DEFAULT_EXHAUSTIVE_EDGE_LIMIT`]; see [`ExhaustiveSearch::search`].
///
/// # Errors
/// Returns [`MstError::ExhaustiveLimitExceeded`] for graphs beyond the limit.
///
/// # Examples
/// ```
/// use gridspan_core::{Graph, exhaustive_mst};
///
/// let disconnected = Graph::from_triples(4, &[(0, 1, 1)]).expect("graph is valid");
/// assert_eq!(exhaustive_mst(&disconnected)?, None);
/// # Ok::<(), gridspan_core::MstError>(())
/// ```
pub fn exhaustive_mst(graph: &Graph) -> Result<Option<Vec<Edge>>, MstError> {
    ExhaustiveSearch::default().search(graph)
}

fn select(edges: &[Edge], mask: u64) -> impl Iterator<Item = &Edge> {
    edges
        .iter()
        .enumerate()
        .filter(move |(bit, _)| mask & (1_u64 << bit) != 0)
        .map(|(_, edge)| edge)
}

/// Returns the subset's weight when it forms a spanning tree.
fn spanning_weight(node_count: usize, edges: &[Edge], mask: u64) -> Option<WeightSum> {
    let mut components = DisjointSet::new(node_count);
    let mut weight: WeightSum = 0;
    for edge in select(edges, mask) {
        if !components.union(edge.source(), edge.target()) {
            return None;
        }
        weight += WeightSum::from(edge.weight());
    }
    (components.components() == 1).then_some(weight)
}

/// Returns the next larger mask with the same number of set bits.
fn next_subset(mask: u64) -> u64 {
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask + lowest;
    (((ripple ^ mask) >> 2) / lowest) | ripple
}
