//! Immutable weighted undirected graph model.
//!
//! A [`Graph`] is a node count plus an ordered edge list. Construction
//! enforces that every endpoint lies in `[0, node_count)` and that no edge is
//! a self-loop; after that the graph is never mutated.

use crate::error::GraphError;

/// Identifier of a node in `[0, node_count)`.
pub type NodeId = usize;

/// Integral edge weight.
pub type Weight = i64;

/// Sum of edge weights.
///
/// Wide enough that adding any realistic number of [`Weight`] values can
/// neither overflow nor wrap.
pub type WeightSum = i128;

/// A weighted undirected edge.
///
/// `(a, b, w)` and `(b, a, w)` describe the same link; the stored orientation
/// is preserved so engines can report edges the way they discovered them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::Edge;
    ///
    /// let edge = Edge::new(2, 0, 7);
    /// assert_eq!(edge.source(), 2);
    /// assert_eq!(edge.key(), (0, 2));
    /// ```
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was recorded from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the endpoint the edge was recorded to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the unordered endpoint pair in canonical `(min, max)` form.
    #[must_use]
    pub const fn key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((source, target, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A validated weighted undirected graph.
///
/// # Examples
/// ```
/// use gridspan_core::{Edge, Graph};
///
/// let graph = Graph::new(3, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 2)])
///     .expect("graph is valid");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking node bounds and self-loops.
    ///
    /// Parallel edges between the same pair of nodes are permitted.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `node_count == 0`,
    /// [`GraphError::InvalidNodeId`] when an endpoint is out of range, and
    /// [`GraphError::SelfLoop`] when an edge joins a node to itself. The first
    /// offending edge in input order is reported.
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        for (edge_index, edge) in edges.iter().enumerate() {
            for node in [edge.source, edge.target] {
                if node >= node_count {
                    return Err(GraphError::InvalidNodeId {
                        edge_index,
                        node,
                        node_count,
                    });
                }
            }
            if edge.source == edge.target {
                return Err(GraphError::SelfLoop {
                    edge_index,
                    node: edge.source,
                });
            }
        }

        Ok(Self { node_count, edges })
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Graph::new`].
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::Graph;
    ///
    /// let graph = Graph::from_triples(2, &[(0, 1, 3)]).expect("graph is valid");
    /// assert_eq!(graph.edges()[0].weight(), 3);
    /// ```
    pub fn from_triples(
        node_count: usize,
        triples: &[(NodeId, NodeId, Weight)],
    ) -> Result<Self, GraphError> {
        Self::new(node_count, triples.iter().copied().map(Edge::from).collect())
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the number of edges a spanning tree of this graph has.
    #[must_use]
    pub const fn spanning_edge_count(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Builds the symmetric adjacency representation used by Prim's algorithm.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_graph(self)
    }
}

/// Symmetric adjacency lists: for each node, its `(neighbour, weight)` pairs.
///
/// Every edge `(a, b, w)` of the source graph appears as `(b, w)` in `a`'s
/// list and as `(a, w)` in `b`'s list, in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Adjacency {
    neighbours: Vec<Vec<(NodeId, Weight)>>,
    edge_count: usize,
}

impl Adjacency {
    /// Builds adjacency lists for `graph`.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::{Adjacency, Graph};
    ///
    /// let graph = Graph::from_triples(3, &[(0, 1, 5), (2, 0, 1)]).expect("graph is valid");
    /// let adjacency = Adjacency::from_graph(&graph);
    /// assert_eq!(adjacency.neighbours(0), &[(1, 5), (2, 1)]);
    /// assert_eq!(adjacency.neighbours(2), &[(0, 1)]);
    /// ```
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut neighbours = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            if let Some(list) = neighbours.get_mut(edge.source) {
                list.push((edge.target, edge.weight));
            }
            if let Some(list) = neighbours.get_mut(edge.target) {
                list.push((edge.source, edge.weight));
            }
        }
        Self {
            neighbours,
            edge_count: graph.edge_count(),
        }
    }

    /// Returns the number of nodes covered by the lists.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.neighbours.len() }

    /// Returns the number of edges the lists were built from.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the neighbours of `node`, or an empty slice for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.neighbours
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
