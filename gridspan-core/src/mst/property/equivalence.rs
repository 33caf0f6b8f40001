//! Property 1: Kruskal and Prim agree with exhaustive search.
//!
//! On a connected graph both greedy engines must produce a spanning tree
//! whose weight equals the exhaustive optimum. On a disconnected graph the
//! oracle finds nothing and neither greedy result spans.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstStrategy, exhaustive_mst, kruskal_mst, prim_mst, total_weight};

use super::oracle::count_components;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = exhaustive_mst(graph).map_err(|error| {
        TestCaseError::fail(format!("exhaustive search failed: {error} ({})", fixture.describe()))
    })?;

    let kruskal = kruskal_mst(graph);
    let prim = prim_mst(&graph.adjacency());
    let connected = count_components(graph) == 1;

    match oracle {
        Some(optimum) => {
            if !connected {
                return Err(TestCaseError::fail(format!(
                    "oracle found a tree in a disconnected graph ({})",
                    fixture.describe()
                )));
            }
            let expected = total_weight(&optimum);
            for (engine, edges) in [("kruskal", &kruskal), ("prim", &prim)] {
                if edges.len() != graph.spanning_edge_count() {
                    return Err(TestCaseError::fail(format!(
                        "{engine} selected {} edges, expected {} ({})",
                        edges.len(),
                        graph.spanning_edge_count(),
                        fixture.describe()
                    )));
                }
                let actual = total_weight(edges);
                if actual != expected {
                    return Err(TestCaseError::fail(format!(
                        "{engine} weight {actual} differs from optimum {expected} ({})",
                        fixture.describe()
                    )));
                }
            }
        }
        None => {
            if connected {
                return Err(TestCaseError::fail(format!(
                    "oracle found no tree in a connected graph ({})",
                    fixture.describe()
                )));
            }
            if kruskal.len() == graph.spanning_edge_count()
                || prim.len() == graph.spanning_edge_count()
            {
                return Err(TestCaseError::fail(format!(
                    "greedy engine spanned a disconnected graph ({})",
                    fixture.describe()
                )));
            }
        }
    }

    run_strategy_dispatch(fixture)
}

/// Checks that every [`MstStrategy`] agrees on connectivity and optimum.
fn run_strategy_dispatch(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let mut weights = Vec::with_capacity(MstStrategy::ALL.len());
    for strategy in MstStrategy::ALL {
        let tree = strategy.spanning_tree(graph).map_err(|error| {
            TestCaseError::fail(format!("{strategy} failed: {error} ({})", fixture.describe()))
        })?;
        weights.push((strategy, tree.is_spanning(), tree.total_weight()));
    }

    let disagree = weights.windows(2).any(|pair| {
        pair[0].1 != pair[1].1 || (pair[0].1 && pair[0].2 != pair[1].2)
    });
    if disagree {
        return Err(TestCaseError::fail(format!(
            "strategies disagree: {weights:?} ({})",
            fixture.describe()
        )));
    }
    Ok(())
}
