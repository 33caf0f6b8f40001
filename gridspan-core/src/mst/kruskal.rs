//! Kruskal's algorithm over a union-find.

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Edge, Graph},
    union_find::DisjointSet,
};

use super::{MstEngine, SpanningTree};

/// Greedy edge-sorted engine. Runs in `O(m log m)` and never fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal;

impl MstEngine for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        Ok(SpanningTree::new(kruskal_mst(graph), graph.node_count()))
    }
}

/// Computes a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Edges are stably sorted by weight, so equal weights are considered in
/// input order, and each edge joining two components is accepted. The scan
/// stops once `n - 1` edges are selected. For a disconnected graph the result
/// has fewer than `n - 1` edges.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, Graph, kruskal_mst};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 5), (1, 2, 1), (0, 2, 2)])
///     .expect("graph is valid");
/// assert_eq!(kruskal_mst(&graph), vec![Edge::new(1, 2, 1), Edge::new(0, 2, 2)]);
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn kruskal_mst(graph: &Graph) -> Vec<Edge> {
    let target = graph.spanning_edge_count();
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(Edge::weight);

    let mut components = DisjointSet::new(graph.node_count());
    let mut tree = Vec::with_capacity(target.min(graph.edge_count()));
    for edge in sorted {
        if tree.len() == target {
            break;
        }
        if components.union(edge.source(), edge.target()) {
            tree.push(edge);
        }
    }

    if tree.len() < target {
        debug!(
            selected = tree.len(),
            required = target,
            components = components.components(),
            "graph is disconnected; returning a spanning forest"
        );
    }
    tree
}
