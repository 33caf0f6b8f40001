//! Property 2: Structural invariant verification.
//!
//! For every engine's output, verifies:
//!
//! - **Acyclicity**: each edge merges two distinct components.
//! - **Provenance**: each edge is a graph edge, orientation aside.
//! - **Edge count**: Kruskal yields `n - c` edges; Prim yields one fewer
//!   than the size of node `0`'s component.
//! - **Spanning check**: [`crate::is_spanning_tree`] accepts exactly the
//!   spanning results.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Edge, is_spanning_tree, kruskal_mst, prim_mst};

use super::oracle::{component_size, count_components, drawn_from_graph};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let node_count = graph.node_count();

    let kruskal = kruskal_mst(graph);
    let prim = prim_mst(&graph.adjacency());

    for (engine, edges) in [("kruskal", &kruskal), ("prim", &prim)] {
        validate_acyclicity(node_count, edges)
            .map_err(|msg| fail(engine, &msg, fixture))?;
        if !drawn_from_graph(graph, edges) {
            return Err(fail(engine, "selected an edge absent from the graph", fixture));
        }
        let spans = edges.len() == graph.spanning_edge_count();
        if is_spanning_tree(node_count, edges) != spans {
            return Err(fail(engine, "is_spanning_tree disagrees with edge count", fixture));
        }
    }

    let expected_forest = node_count - count_components(graph);
    if kruskal.len() != expected_forest {
        return Err(fail(
            "kruskal",
            &format!("selected {} edges, expected n - c = {expected_forest}", kruskal.len()),
            fixture,
        ));
    }

    let expected_prim = component_size(graph, 0) - 1;
    if prim.len() != expected_prim {
        return Err(fail(
            "prim",
            &format!("selected {} edges, expected {expected_prim}", prim.len()),
            fixture,
        ));
    }

    validate_prim_orientation(&prim).map_err(|msg| fail("prim", &msg, fixture))
}

fn fail(engine: &str, message: &str, fixture: &MstFixture) -> TestCaseError {
    TestCaseError::fail(format!("{engine}: {message} ({})", fixture.describe()))
}

/// Detects cycles with a fresh union-find pass.
fn validate_acyclicity(node_count: usize, edges: &[Edge]) -> Result<(), String> {
    let mut set = DisjointSet::new(node_count);
    for (index, edge) in edges.iter().enumerate() {
        if !set.union(edge.source(), edge.target()) {
            return Err(format!(
                "edge {index}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target()
            ));
        }
    }
    Ok(())
}

/// Verifies that each Prim edge leaves the tree built so far.
fn validate_prim_orientation(edges: &[Edge]) -> Result<(), String> {
    let mut reached = vec![0];
    for (index, edge) in edges.iter().enumerate() {
        if !reached.contains(&edge.source()) || reached.contains(&edge.target()) {
            return Err(format!(
                "edge {index}: ({}, {}) is not oriented from the tree outwards",
                edge.source(),
                edge.target()
            ));
        }
        reached.push(edge.target());
    }
    Ok(())
}
