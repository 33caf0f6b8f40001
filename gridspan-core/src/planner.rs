//! Network planning orchestration.
//!
//! A [`GridPlanner`] validates edge weights, runs the configured spanning
//! tree engine, selects redundant links, and totals the cost of both.

use tracing::{info, instrument, warn};

use crate::{
    Result,
    graph::{Edge, Graph, WeightSum},
    mst::{DEFAULT_EXHAUSTIVE_EDGE_LIMIT, ExhaustiveSearch, MstEngine, MstStrategy, SpanningTree},
    redundancy::add_redundancy,
    validate::{WeightRange, validate_weights},
    weight::total_weight,
};

/// Configures and constructs [`GridPlanner`] instances.
///
/// # Examples
/// ```
/// use gridspan_core::{GridPlannerBuilder, MstStrategy, WeightRange};
///
/// let planner = GridPlannerBuilder::new()
///     .with_strategy(MstStrategy::Prim)
///     .with_redundancy(2)
///     .with_weight_range(WeightRange::new(1, 20).expect("range is ordered"))
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(planner.strategy(), MstStrategy::Prim);
/// assert_eq!(planner.redundancy(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridPlannerBuilder {
    strategy: MstStrategy,
    redundancy: usize,
    weight_range: WeightRange,
    exhaustive_edge_limit: usize,
}

impl Default for GridPlannerBuilder {
    fn default() -> Self {
        Self {
            strategy: MstStrategy::default(),
            redundancy: 0,
            weight_range: WeightRange::UNBOUNDED,
            exhaustive_edge_limit: DEFAULT_EXHAUSTIVE_EDGE_LIMIT,
        }
    }
}

impl GridPlannerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::{GridPlannerBuilder, MstStrategy, WeightRange};
    ///
    /// let builder = GridPlannerBuilder::new();
    /// assert_eq!(builder.strategy(), MstStrategy::Kruskal);
    /// assert_eq!(builder.redundancy(), 0);
    /// assert_eq!(builder.weight_range(), WeightRange::UNBOUNDED);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the spanning tree engine.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MstStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> MstStrategy {
        self.strategy
    }

    /// Sets how many redundant edges to add beyond the tree.
    #[must_use]
    pub fn with_redundancy(mut self, k: usize) -> Self {
        self.redundancy = k;
        self
    }

    /// Returns the configured redundancy count.
    #[must_use]
    pub fn redundancy(&self) -> usize {
        self.redundancy
    }

    /// Restricts accepted edge weights to `range`.
    #[must_use]
    pub fn with_weight_range(mut self, range: WeightRange) -> Self {
        self.weight_range = range;
        self
    }

    /// Returns the configured weight range.
    #[must_use]
    pub fn weight_range(&self) -> WeightRange {
        self.weight_range
    }

    /// Overrides the edge limit applied when the exhaustive strategy runs.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::GridPlannerBuilder;
    ///
    /// assert!(GridPlannerBuilder::new().with_exhaustive_edge_limit(30).build().is_ok());
    /// assert!(GridPlannerBuilder::new().with_exhaustive_edge_limit(64).build().is_err());
    /// ```
    #[must_use]
    pub fn with_exhaustive_edge_limit(mut self, limit: usize) -> Self {
        self.exhaustive_edge_limit = limit;
        self
    }

    /// Validates the configuration and constructs a [`GridPlanner`].
    ///
    /// # Errors
    /// Returns [`crate::GridError::Mst`] wrapping
    /// [`crate::MstError::InvalidEdgeLimit`] when the exhaustive edge limit
    /// exceeds what the search supports.
    pub fn build(self) -> Result<GridPlanner> {
        let exhaustive = ExhaustiveSearch::with_edge_limit(self.exhaustive_edge_limit)?;
        Ok(GridPlanner {
            strategy: self.strategy,
            redundancy: self.redundancy,
            weight_range: self.weight_range,
            exhaustive,
        })
    }
}

/// Plans a grid network: a minimum spanning tree plus redundant links.
///
/// # Examples
/// ```
/// use gridspan_core::{Graph, GridPlannerBuilder};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)])
///     .expect("graph is valid");
/// let plan = GridPlannerBuilder::new()
///     .with_redundancy(1)
///     .build()
///     .expect("configuration is valid")
///     .plan(&graph)
///     .expect("weights are valid");
/// assert!(plan.is_spanning());
/// assert_eq!(plan.tree_weight(), 3);
/// assert_eq!(plan.redundancy_weight(), 5);
/// assert_eq!(plan.total_weight(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GridPlanner {
    strategy: MstStrategy,
    redundancy: usize,
    weight_range: WeightRange,
    exhaustive: ExhaustiveSearch,
}

impl GridPlanner {
    /// Returns the strategy used by [`Self::plan`].
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> MstStrategy { self.strategy }

    /// Returns the number of redundant edges requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn redundancy(&self) -> usize { self.redundancy }

    /// Returns the accepted weight range.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight_range(&self) -> WeightRange { self.weight_range }

    /// Runs validation, the spanning tree engine, and redundancy selection.
    ///
    /// A disconnected graph still produces a plan; check
    /// [`GridPlan::is_spanning`].
    ///
    /// # Errors
    /// Returns [`crate::GridError::InvalidWeight`] for the first edge outside
    /// the weight range, in which case no engine runs, and
    /// [`crate::GridError::Mst`] when the engine rejects the graph.
    #[instrument(
        name = "core.plan",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = %self.strategy,
            redundancy = self.redundancy,
        ),
    )]
    pub fn plan(&self, graph: &Graph) -> Result<GridPlan> {
        validate_weights(graph.edges(), self.weight_range)?;

        let tree = self.spanning_tree(graph)?;
        if !tree.is_spanning() {
            warn!(
                selected = tree.len(),
                required = graph.spanning_edge_count(),
                "graph is disconnected; plan does not span every node"
            );
        }

        let redundant = add_redundancy(graph.edges(), tree.edges(), self.redundancy);
        let plan = GridPlan {
            strategy: self.strategy,
            tree,
            redundancy_weight: total_weight(&redundant),
            redundant,
        };
        info!(
            tree_weight = plan.tree_weight(),
            redundancy_weight = plan.redundancy_weight(),
            spanning = plan.is_spanning(),
            "plan completed"
        );
        Ok(plan)
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree> {
        let tree = match self.strategy {
            MstStrategy::Exhaustive => self.exhaustive.spanning_tree(graph)?,
            other => other.spanning_tree(graph)?,
        };
        Ok(tree)
    }
}

/// Output of [`GridPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    strategy: MstStrategy,
    tree: SpanningTree,
    redundant: Vec<Edge>,
    redundancy_weight: WeightSum,
}

impl GridPlan {
    /// Returns the strategy that produced the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> MstStrategy { self.strategy }

    /// Returns the node count of the planned graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.tree.node_count() }

    /// Returns the spanning tree (or forest) edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree_edges(&self) -> &[Edge] { self.tree.edges() }

    /// Returns the summed weight of the tree edges.
    #[must_use]
    pub fn tree_weight(&self) -> WeightSum {
        self.tree.total_weight()
    }

    /// Returns the redundant edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn redundancy_edges(&self) -> &[Edge] { &self.redundant }

    /// Returns the summed weight of the redundant edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn redundancy_weight(&self) -> WeightSum { self.redundancy_weight }

    /// Returns the combined weight of tree and redundant edges.
    #[must_use]
    pub fn total_weight(&self) -> WeightSum {
        self.tree_weight() + self.redundancy_weight
    }

    /// Returns `true` when the tree connects every node.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.tree.is_spanning()
    }
}
