//! Seeded random graph generation for benchmarks and sample inputs.

use std::{collections::HashSet, ops::RangeInclusive};

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    error::{GeneratorError, InvertedWeightRange},
    graph::{Edge, Graph, NodeId, Weight},
};

/// Parameters for [`generate_graph`].
///
/// # Examples
/// ```
/// use gridspan_core::GeneratorConfig;
///
/// let config = GeneratorConfig::new(10, 15).with_seed(7);
/// assert_eq!(config.weight_range, 1..=20);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of distinct edges to generate.
    pub edge_count: usize,
    /// Inclusive range edge weights are drawn from.
    pub weight_range: RangeInclusive<Weight>,
    /// Seed for the deterministic random source.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Creates a configuration with weights in `1..=20` and seed `0`.
    #[must_use]
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            edge_count,
            weight_range: 1..=20,
            seed: 0,
        }
    }

    /// Overrides the weight range.
    #[must_use]
    pub fn with_weight_range(mut self, weight_range: RangeInclusive<Weight>) -> Self {
        self.weight_range = weight_range;
        self
    }

    /// Overrides the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of distinct edges a simple graph on
    /// `node_count` nodes can hold, `n(n-1)/2`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let n = self.node_count;
        if n % 2 == 0 {
            (n / 2).saturating_mul(n.saturating_sub(1))
        } else {
            n.saturating_mul(n.saturating_sub(1) / 2)
        }
    }
}

/// Generates a random simple graph.
///
/// Endpoints are drawn uniformly and self-loop draws are retried; each
/// unordered pair appears at most once. Weights are uniform over the
/// configured range. The same configuration always yields the same graph.
///
/// # Errors
/// Returns [`GeneratorError::TooManyEdges`] when `edge_count` exceeds
/// `n(n-1)/2`, [`GeneratorError::InvertedWeightRange`] when the range is
/// empty, and [`GeneratorError::Graph`] when `node_count` is zero.
///
/// # Examples
/// ```
/// use gridspan_core::{GeneratorConfig, generate_graph};
///
/// let config = GeneratorConfig::new(6, 9).with_seed(42);
/// let graph = generate_graph(&config)?;
/// assert_eq!(graph.edge_count(), 9);
/// assert_eq!(graph, generate_graph(&config)?);
/// # Ok::<(), gridspan_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.generate",
    err,
    skip(config),
    fields(
        nodes = config.node_count,
        edges = config.edge_count,
        seed = config.seed,
    ),
)]
pub fn generate_graph(config: &GeneratorConfig) -> Result<Graph, GeneratorError> {
    let (min, max) = (*config.weight_range.start(), *config.weight_range.end());
    if min > max {
        return Err(InvertedWeightRange { min, max }.into());
    }
    let capacity = config.capacity();
    if config.edge_count > capacity {
        return Err(GeneratorError::TooManyEdges {
            requested: config.edge_count,
            capacity,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let pairs = if config.edge_count <= capacity / 2 {
        sample_pairs(&mut rng, config.node_count, config.edge_count)
    } else {
        choose_pairs(&mut rng, config.node_count, config.edge_count)
    };

    let edges = pairs
        .into_iter()
        .map(|(source, target)| Edge::new(source, target, rng.gen_range(min..=max)))
        .collect();
    let graph = Graph::new(config.node_count, edges)?;
    debug!(edges = graph.edge_count(), "graph generated");
    Ok(graph)
}

/// Rejection sampling; efficient while at most half the pairs are taken.
fn sample_pairs(rng: &mut SmallRng, node_count: usize, count: usize) -> Vec<(NodeId, NodeId)> {
    let mut seen = HashSet::with_capacity(count);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source == target {
            continue;
        }
        if seen.insert((source.min(target), source.max(target))) {
            pairs.push((source, target));
        }
    }
    pairs
}

/// Partial shuffle of every pair; used for dense requests.
fn choose_pairs(rng: &mut SmallRng, node_count: usize, count: usize) -> Vec<(NodeId, NodeId)> {
    let mut all: Vec<(NodeId, NodeId)> = (0..node_count)
        .flat_map(|source| ((source + 1)..node_count).map(move |target| (source, target)))
        .collect();
    let (chosen, _) = all.partial_shuffle(rng, count);
    chosen
        .iter()
        .map(|&(source, target)| {
            if rng.gen_bool(0.5) {
                (source, target)
            } else {
                (target, source)
            }
        })
        .collect()
}
