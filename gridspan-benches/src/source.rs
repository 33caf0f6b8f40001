//! Seeded connected graphs for benchmarks.
//!
//! [`gridspan_core::generate_graph`] draws edges uniformly and may leave the
//! graph disconnected, which would let Prim stop early and skew engine
//! comparisons. [`connected_graph`] starts from a random spanning tree and
//! then adds distinct extra edges.

use std::collections::HashSet;

use gridspan_core::{Edge, Graph, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Largest weight placed on a benchmark edge.
pub const MAX_BENCH_WEIGHT: Weight = 1_000;

/// Generates a connected simple graph of the requested size.
///
/// # Errors
/// Returns [`BenchSetupError::EdgeCount`] when `edge_count` is below
/// `node_count - 1` or above `n(n-1)/2`, and [`BenchSetupError::Graph`] when
/// `node_count` is zero.
pub fn connected_graph(params: GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let GraphBenchParams {
        node_count,
        edge_count,
    } = params;
    let capacity = node_count.saturating_mul(node_count.saturating_sub(1)) / 2;
    if edge_count < node_count.saturating_sub(1) || edge_count > capacity {
        return Err(BenchSetupError::EdgeCount {
            requested: edge_count,
            node_count,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(edge_count);
    let mut edges = Vec::with_capacity(edge_count);

    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        seen.insert((parent, node));
        edges.push(Edge::new(parent, node, rng.gen_range(1..=MAX_BENCH_WEIGHT)));
    }
    while edges.len() < edge_count {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a != b && seen.insert((a.min(b), a.max(b))) {
            edges.push(Edge::new(a, b, rng.gen_range(1..=MAX_BENCH_WEIGHT)));
        }
    }

    Graph::new(node_count, edges).map_err(BenchSetupError::from)
}
