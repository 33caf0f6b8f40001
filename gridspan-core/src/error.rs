//! Error types for the gridspan core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::{NodeId, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared zero nodes.
    #[error("a graph must contain at least one node")]
    EmptyGraph,
    /// An edge referenced a node id outside `[0, node_count)`.
    #[error("edge {edge_index} references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// Position of the offending edge in the input sequence.
        edge_index: usize,
        /// The out-of-range node id.
        node: NodeId,
        /// Number of nodes declared by the graph.
        node_count: usize,
    },
    /// An edge connected a node to itself.
    #[error("edge {edge_index} is a self-loop on node {node}")]
    SelfLoop {
        /// Position of the offending edge in the input sequence.
        edge_index: usize,
        /// The node the loop is attached to.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph declared zero nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a node id outside the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// An edge weight fell outside the caller's declared inclusive range.
///
/// Reported for the first offending edge in input order.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("edge {edge_index} has weight {weight} outside the range [{min}, {max}]")]
pub struct InvalidWeight {
    /// Position of the offending edge in the input sequence.
    pub edge_index: usize,
    /// The out-of-range weight.
    pub weight: Weight,
    /// Inclusive lower bound that was requested.
    pub min: Weight,
    /// Inclusive upper bound that was requested.
    pub max: Weight,
}

/// A weight range whose lower bound exceeds its upper bound.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("minimum weight {min} is greater than maximum weight {max}")]
pub struct InvertedWeightRange {
    /// The requested lower bound.
    pub min: Weight,
    /// The requested upper bound.
    pub max: Weight,
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The graph has too many edges for subset enumeration.
    #[error("exhaustive search supports at most {limit} edges, but the graph has {edges}")]
    ExhaustiveLimitExceeded {
        /// Number of edges in the graph.
        edges: usize,
        /// Configured edge limit.
        limit: usize,
    },
    /// An exhaustive edge limit beyond the bitmask width was requested.
    #[error("exhaustive edge limit {requested} exceeds the maximum of {max}")]
    InvalidEdgeLimit {
        /// Limit supplied by the caller.
        requested: usize,
        /// Largest supported limit.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has too many edges for subset enumeration.
        ExhaustiveLimitExceeded => ExhaustiveLimitExceeded { .. } => "MST_EXHAUSTIVE_LIMIT_EXCEEDED",
        /// An exhaustive edge limit beyond the bitmask width was requested.
        InvalidEdgeLimit => InvalidEdgeLimit { .. } => "MST_INVALID_EDGE_LIMIT",
    }
}

/// Errors rejecting a random graph generation request.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// More edges were requested than a simple graph on `n` nodes can hold.
    #[error("requested {requested} edges, but a simple graph on these nodes holds at most {capacity}")]
    TooManyEdges {
        /// Number of edges requested.
        requested: usize,
        /// Maximum number of distinct edges, `n(n-1)/2`.
        capacity: usize,
    },
    /// The weight range was inverted.
    #[error(transparent)]
    InvertedWeightRange(#[from] InvertedWeightRange),
    /// The generated edges did not form a valid graph.
    #[error("generated graph is invalid: {0}")]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// More edges were requested than the graph can hold.
        TooManyEdges => TooManyEdges { .. } => "GENERATOR_TOO_MANY_EDGES",
        /// The weight range was inverted.
        InvertedWeightRange => InvertedWeightRange(..) => "GENERATOR_INVERTED_WEIGHT_RANGE",
        /// The generated edges did not form a valid graph.
        InvalidGraph => Graph(..) => "GENERATOR_INVALID_GRAPH",
    }
}

/// Error type produced when configuring or running a [`crate::GridPlanner`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    /// The configured weight range was inverted.
    #[error(transparent)]
    InvertedWeightRange(#[from] InvertedWeightRange),
    /// An edge weight failed validation; no engine was run.
    #[error("weight validation failed: {0}")]
    InvalidWeight(#[from] InvalidWeight),
    /// The graph could not be constructed.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    /// The selected engine could not compute a spanning tree.
    #[error("spanning tree computation failed: {0}")]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`GridError`] variants.
    enum GridErrorCode for GridError {
        /// The configured weight range was inverted.
        InvertedWeightRange => InvertedWeightRange(..) => "GRID_INVERTED_WEIGHT_RANGE",
        /// An edge weight failed validation.
        InvalidWeight => InvalidWeight(..) => "GRID_INVALID_WEIGHT",
        /// The graph could not be constructed.
        InvalidGraph => Graph(..) => "GRID_INVALID_GRAPH",
        /// The selected engine failed.
        MstFailure => Mst(..) => "GRID_MST_FAILURE",
    }
}

impl GridError {
    /// Retrieve the inner [`GraphErrorCode`] when graph construction failed.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`MstErrorCode`] when an engine failed.
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the planner API.
pub type Result<T> = core::result::Result<T, GridError>;
