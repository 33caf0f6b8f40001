//! Edge-weight range validation.

use crate::{
    error::{InvalidWeight, InvertedWeightRange},
    graph::{Edge, Weight},
};

/// Inclusive `[min, max]` bounds for edge weights.
///
/// # Examples
/// ```
/// use gridspan_core::WeightRange;
///
/// let range = WeightRange::new(1, 20).expect("range is ordered");
/// assert!(range.contains(20));
/// assert!(!range.contains(21));
/// assert!(WeightRange::new(5, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightRange {
    min: Weight,
    max: Weight,
}

impl WeightRange {
    /// Accepts every representable weight.
    pub const UNBOUNDED: Self = Self {
        min: Weight::MIN,
        max: Weight::MAX,
    };

    /// Creates a range, rejecting `min > max`.
    ///
    /// # Errors
    /// Returns [`InvertedWeightRange`] when the bounds are out of order.
    pub const fn new(min: Weight, max: Weight) -> Result<Self, InvertedWeightRange> {
        if min > max {
            return Err(InvertedWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> Weight { self.min }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> Weight { self.max }

    /// Returns `true` when `weight` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, weight: Weight) -> bool {
        self.min <= weight && weight <= self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Checks that every edge weight lies within `range`.
///
/// Scans in input order and stops at the first violation.
///
/// # Errors
/// Returns [`InvalidWeight`] describing the first out-of-range edge.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, WeightRange, validate_weights};
///
/// let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 15)];
/// assert!(validate_weights(&edges, WeightRange::new(1, 20)?).is_ok());
///
/// let err = validate_weights(&edges, WeightRange::new(1, 5)?).unwrap_err();
/// assert_eq!(err.weight, 15);
/// # Ok::<(), gridspan_core::InvertedWeightRange>(())
/// ```
pub fn validate_weights(edges: &[Edge], range: WeightRange) -> Result<(), InvalidWeight> {
    match edges
        .iter()
        .enumerate()
        .find(|(_, edge)| !range.contains(edge.weight()))
    {
        Some((edge_index, edge)) => Err(InvalidWeight {
            edge_index,
            weight: edge.weight(),
            min: range.min,
            max: range.max,
        }),
        None => Ok(()),
    }
}
