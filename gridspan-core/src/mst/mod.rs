//! Minimum spanning tree (MST) construction.
//!
//! Three interchangeable engines share the [`MstEngine`] contract:
//! [`ExhaustiveSearch`] enumerates every edge subset and serves as the
//! reference oracle for small graphs, [`Kruskal`] scans edges in weight order
//! over a union-find, and [`Prim`] grows a frontier from node `0` with a
//! min-heap. A disconnected graph is not an error: Kruskal and Prim return a
//! spanning forest that is too short, and exhaustive search finds nothing.

mod exhaustive;
mod kruskal;
mod prim;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    error::MstError,
    graph::{Edge, Graph},
    union_find::DisjointSet,
    weight::total_weight,
};

pub use self::{
    exhaustive::{
        DEFAULT_EXHAUSTIVE_EDGE_LIMIT, ExhaustiveSearch, MAX_EXHAUSTIVE_EDGE_LIMIT, exhaustive_mst,
    },
    kruskal::{Kruskal, kruskal_mst},
    prim::{Prim, prim_mst},
};

/// Capability shared by every spanning tree strategy.
pub trait MstEngine {
    /// Returns a short lowercase name for logs and reports.
    fn name(&self) -> &'static str;

    /// Computes a minimum spanning tree (or forest) of `graph`.
    ///
    /// Callers detect disconnection with [`SpanningTree::is_spanning`].
    ///
    /// # Errors
    /// Returns [`MstError`] when the engine cannot process the graph at all,
    /// such as exhaustive search on a graph beyond its edge limit.
    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError>;
}

/// The edges an engine selected, together with the graph's node count.
///
/// # Examples
/// ```
/// use gridspan_core::{Graph, Kruskal, MstEngine};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 9)])
///     .expect("graph is valid");
/// let tree = Kruskal.spanning_tree(&graph).expect("kruskal never fails");
/// assert!(tree.is_spanning());
/// assert_eq!(tree.total_weight(), 5);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    node_count: usize,
}

impl SpanningTree {
    pub(crate) fn new(edges: Vec<Edge>, node_count: usize) -> Self {
        Self { edges, node_count }
    }

    /// Returns the selected edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the node count of the graph the tree was computed for.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns `true` when the tree has exactly `n - 1` edges.
    ///
    /// Engines only ever return acyclic edge sets, so the edge count alone
    /// distinguishes a spanning tree from a disconnected result.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.node_count.saturating_sub(1)
    }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    pub fn total_weight(&self) -> crate::WeightSum {
        total_weight(&self.edges)
    }
}

/// Selects which [`MstEngine`] computes the spanning tree.
///
/// # Examples
/// ```
/// use gridspan_core::MstStrategy;
///
/// let strategy: MstStrategy = "Prim".parse().expect("strategy name is known");
/// assert_eq!(strategy, MstStrategy::Prim);
/// assert_eq!(strategy.to_string(), "prim");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MstStrategy {
    /// Enumerate every edge subset; exponential, small graphs only.
    Exhaustive,
    /// Kruskal's edge-sorted greedy algorithm.
    #[default]
    Kruskal,
    /// Prim's frontier-growing algorithm starting from node `0`.
    Prim,
}

impl MstStrategy {
    /// Every supported strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Exhaustive, Self::Kruskal, Self::Prim];

    /// Returns the lowercase strategy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// Runs the selected engine with its default configuration.
    ///
    /// # Errors
    /// Propagates the engine's [`MstError`].
    pub fn spanning_tree(self, graph: &Graph) -> Result<SpanningTree, MstError> {
        match self {
            Self::Exhaustive => ExhaustiveSearch::default().spanning_tree(graph),
            Self::Kruskal => Kruskal.spanning_tree(graph),
            Self::Prim => Prim.spanning_tree(graph),
        }
    }
}

impl fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`MstStrategy`] name.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown MST strategy `{provided}`; expected `exhaustive`, `kruskal`, or `prim`")]
pub struct ParseStrategyError {
    /// The rejected input.
    pub provided: String,
}

impl FromStr for MstStrategy {
    type Err = ParseStrategyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ParseStrategyError {
                provided: raw.to_owned(),
            })
    }
}

/// Returns `true` when `edges` form a spanning tree over `node_count` nodes.
///
/// A fresh union-find pass must see exactly `n - 1` edges, each of which
/// merges two previously distinct components.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, is_spanning_tree};
///
/// assert!(is_spanning_tree(3, &[Edge::new(0, 1, 1), Edge::new(2, 1, 1)]));
/// assert!(!is_spanning_tree(3, &[Edge::new(0, 1, 1), Edge::new(1, 0, 1)]));
/// ```
#[must_use]
pub fn is_spanning_tree(node_count: usize, edges: &[Edge]) -> bool {
    if edges.len() != node_count.saturating_sub(1) {
        return false;
    }
    let mut components = DisjointSet::new(node_count);
    edges.iter().all(|edge| {
        edge.source() < node_count
            && edge.target() < node_count
            && components.union(edge.source(), edge.target())
    })
}

#[cfg(test)]
mod property;
