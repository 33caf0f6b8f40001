//! Property 3: Redundancy selection over engine output.
//!
//! For every `k` up to the edge count, the selection is disjoint from the
//! tree by unordered pair, sorted by weight, drawn from the graph, sized
//! `min(k, unused)`, and a prefix of the selection for `k + 1`.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, add_redundancy, kruskal_mst};

use super::oracle::drawn_from_graph;
use super::types::MstFixture;

/// Runs the redundancy property for the given fixture.
pub(super) fn run_redundancy_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let tree = kruskal_mst(graph);
    let tree_keys: HashSet<_> = tree.iter().map(Edge::key).collect();
    let unused = graph
        .edges()
        .iter()
        .filter(|edge| !tree_keys.contains(&edge.key()))
        .count();

    let mut previous: Vec<Edge> = Vec::new();
    for k in 0..=graph.edge_count() + 1 {
        let extra = add_redundancy(graph.edges(), &tree, k);
        let fail = |message: String| {
            TestCaseError::fail(format!("k={k}: {message} ({})", fixture.describe()))
        };

        if extra.len() != k.min(unused) {
            return Err(fail(format!(
                "selected {} edges, expected min({k}, {unused})",
                extra.len()
            )));
        }
        if let Some(edge) = extra.iter().find(|edge| tree_keys.contains(&edge.key())) {
            return Err(fail(format!("{edge:?} duplicates a tree edge")));
        }
        if extra.windows(2).any(|pair| pair[0].weight() > pair[1].weight()) {
            return Err(fail(format!("selection is not sorted by weight: {extra:?}")));
        }
        if !drawn_from_graph(graph, &extra) {
            return Err(fail("selected an edge absent from the graph".to_owned()));
        }
        if !extra.starts_with(&previous) {
            return Err(fail("selection is not monotone in k".to_owned()));
        }
        previous = extra;
    }
    Ok(())
}
