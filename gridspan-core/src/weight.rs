//! Weight aggregation over edge collections.

use crate::graph::{Edge, Weight, WeightSum};

/// Sums the weights of `edges`, returning `0` for an empty collection.
///
/// The sum is taken in [`WeightSum`], so extreme weights never overflow.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, total_weight};
///
/// assert_eq!(total_weight(&[Edge::new(0, 1, 4), Edge::new(1, 2, 11)]), 15);
/// assert_eq!(total_weight(&[]), 0);
/// ```
#[must_use]
pub fn total_weight(edges: &[Edge]) -> WeightSum {
    edges.iter().map(|edge| WeightSum::from(edge.weight())).sum()
}
