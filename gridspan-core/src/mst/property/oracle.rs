//! Reference facts about generated graphs.
//!
//! Component structure is computed with the crate's own [`DisjointSet`];
//! its unit tests cover it independently of the engines.

use crate::{DisjointSet, Edge, Graph, NodeId};

/// Counts the connected components of `graph`.
pub(super) fn count_components(graph: &Graph) -> usize {
    connect(graph).components()
}

/// Counts the nodes sharing a component with `node`.
pub(super) fn component_size(graph: &Graph, node: NodeId) -> usize {
    let mut set = connect(graph);
    (0..graph.node_count())
        .filter(|&other| set.same(node, other))
        .count()
}

/// Returns `true` when every edge of `selected` can be matched to a distinct
/// graph edge with the same endpoints and weight, in either orientation.
pub(super) fn drawn_from_graph(graph: &Graph, selected: &[Edge]) -> bool {
    let mut unused: Vec<Edge> = graph.edges().to_vec();
    selected.iter().all(|edge| {
        let matching = unused
            .iter()
            .position(|candidate| candidate.key() == edge.key() && candidate.weight() == edge.weight());
        matching.map(|index| unused.swap_remove(index)).is_some()
    })
}

fn connect(graph: &Graph) -> DisjointSet {
    let mut set = DisjointSet::new(graph.node_count());
    for edge in graph.edges() {
        set.union(edge.source(), edge.target());
    }
    set
}
