//! Fixture and weight distribution types for the engine property suite.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Each variant stresses a different aspect of the engines: unique weights
/// give a unique optimum, identical weights exercise tie-breaking, and the
/// topology variants cover sparse, dense, and disconnected inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight.
    Unique,
    /// Edges draw from a pool of one to three weights.
    ManyIdentical,
    /// A random spanning path plus a few extra edges, parallels included.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Two or three components with no edges between them.
    Disconnected,
}

/// Fixture for engine property tests.
///
/// Keeps the distribution alongside the graph so failures name the
/// generator that produced them.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Generated graph; small enough for exhaustive search.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the fixture's shape for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.graph.node_count(),
            self.graph.edge_count(),
        )
    }
}
