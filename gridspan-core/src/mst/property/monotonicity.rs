//! Property 4: Tree weight responds monotonically to weight changes.
//!
//! Raising one edge's weight can never lower the optimum, and shifting every
//! weight by `c` shifts a spanning tree's weight by exactly `c * (n - 1)`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, Graph, Weight, WeightSum, kruskal_mst, total_weight};

use super::types::MstFixture;

/// Runs the monotonicity property, raising edge `pick % m` by `delta`.
pub(super) fn run_monotonicity_property(
    fixture: &MstFixture,
    pick: usize,
    delta: Weight,
) -> TestCaseResult {
    let graph = &fixture.graph;
    let fail = |message: String| TestCaseError::fail(format!("{message} ({})", fixture.describe()));
    let baseline = kruskal_mst(graph);
    let baseline_weight = total_weight(&baseline);

    if graph.edge_count() > 0 {
        let target = pick % graph.edge_count();
        let raised = reweigh(graph, |index, weight| {
            if index == target { weight + delta } else { weight }
        })
        .map_err(|error| fail(error.to_string()))?;
        let raised_weight = total_weight(&kruskal_mst(&raised));
        if raised_weight < baseline_weight {
            return Err(fail(format!(
                "raising edge {target} by {delta} lowered the tree weight from \
                 {baseline_weight} to {raised_weight}"
            )));
        }
    }

    let shifted = reweigh(graph, |_, weight| weight + delta)
        .map_err(|error| fail(error.to_string()))?;
    let shifted_tree = kruskal_mst(&shifted);
    let selected = WeightSum::try_from(baseline.len()).map_err(|error| fail(error.to_string()))?;
    let expected = baseline_weight + WeightSum::from(delta) * selected;
    if shifted_tree.len() != baseline.len() || total_weight(&shifted_tree) != expected {
        return Err(fail(format!(
            "uniform shift by {delta} gave weight {}, expected {expected}",
            total_weight(&shifted_tree)
        )));
    }
    Ok(())
}

fn reweigh(
    graph: &Graph,
    weigh: impl Fn(usize, Weight) -> Weight,
) -> Result<Graph, crate::GraphError> {
    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(index, edge)| Edge::new(edge.source(), edge.target(), weigh(index, edge.weight())))
        .collect();
    Graph::new(graph.node_count(), edges)
}
