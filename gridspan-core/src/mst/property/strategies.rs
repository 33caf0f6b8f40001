//! Graph generation strategies for the engine property suite.
//!
//! Graphs stay small (at most 15 edges) so exhaustive search finishes
//! quickly on every generated case.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Edge, Graph, NodeId, Weight};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for connected generators.
const MIN_NODES: usize = 2;
/// Maximum node count; a complete graph on six nodes has 15 edges.
const MAX_NODES: usize = 6;
/// Largest weight the generators produce.
const MAX_WEIGHT: Weight = 40;

/// Generates fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    let graph = match Graph::new(node_count, edges) {
        Ok(graph) => graph,
        Err(error) => panic!("generator produced an invalid graph: {error}"),
    };
    MstFixture {
        graph,
        distribution,
    }
}

// ── Pair sampling ───────────────────────────────────────────────────────

/// Keeps each unordered pair with the given probability, in pair order.
fn sample_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    edge_probability: f64,
) -> Vec<(NodeId, NodeId)> {
    let mut pairs: Vec<_> = all_pairs(0, node_count)
        .into_iter()
        .filter(|_| rng.gen_bool(edge_probability))
        .collect();
    if pairs.is_empty() && node_count >= 2 {
        pairs.push((0, 1));
    }
    pairs
}

/// Returns all pairs `(offset + i, offset + j)` with `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Randomly swaps endpoints so engines see both orientations.
fn orient(rng: &mut SmallRng, (a, b): (NodeId, NodeId), weight: Weight) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

// ── Distributions ───────────────────────────────────────────────────────

fn generate_unique_weights(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pairs = sample_pairs(rng, node_count, 0.6);
    let mut weights: Vec<Weight> = (1..=MAX_WEIGHT).collect();
    weights.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|(pair, weight)| orient(rng, pair, weight))
        .collect();
    (node_count, edges)
}

fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let pairs = sample_pairs(rng, node_count, 0.7);
    let edges = pairs
        .into_iter()
        .map(|pair| {
            let weight = pool[rng.gen_range(0..pool.len())];
            orient(rng, pair, weight)
        })
        .collect();
    (node_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<NodeId> = (0..node_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(1..=MAX_WEIGHT)))
        .collect();

    // Extras may duplicate existing pairs, which exercises parallel edges.
    let extra_count = rng.gen_range(0..=node_count);
    for _ in 0..extra_count {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a != b {
            edges.push(Edge::new(a, b, rng.gen_range(1..=MAX_WEIGHT)));
        }
    }
    (node_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(3..=MAX_NODES);
    let edge_probability = rng.gen_range(0.7..=0.95);
    let pairs = sample_pairs(rng, node_count, edge_probability);
    let edges = pairs
        .into_iter()
        .map(|pair| {
            let weight = rng.gen_range(1..=MAX_WEIGHT);
            orient(rng, pair, weight)
        })
        .collect();
    (node_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let component_count = rng.gen_range(2..=3);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(1..=3);
        let mut component: Vec<Edge> = all_pairs(offset, size)
            .into_iter()
            .filter_map(|(a, b)| {
                rng.gen_bool(0.6)
                    .then(|| Edge::new(a, b, rng.gen_range(1..=MAX_WEIGHT)))
            })
            .collect();
        // Keep each component connected so the component count is exact.
        for node in (offset + 1)..(offset + size) {
            if !component.iter().any(|edge| edge.key().1 == node) {
                component.push(Edge::new(node - 1, node, rng.gen_range(1..=MAX_WEIGHT)));
            }
        }
        edges.extend(component);
        offset += size;
    }
    (offset, edges)
}

impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
