//! Benchmark parameter types.

use std::fmt;

/// Size of a benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
}

impl GraphBenchParams {
    /// Builds parameters with `edges_per_node * node_count` edges.
    #[must_use]
    pub const fn with_density(node_count: usize, edges_per_node: usize) -> Self {
        Self {
            node_count,
            edge_count: node_count.saturating_mul(edges_per_node),
        }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

/// Parameters for a planner benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlannerBenchParams {
    /// Graph size.
    pub graph: GraphBenchParams,
    /// Redundant links requested per plan.
    pub redundancy: usize,
}

impl fmt::Display for PlannerBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},k={}", self.graph, self.redundancy)
    }
}
