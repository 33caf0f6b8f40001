//! Benchmark setup error type.
//!
//! Lets setup code propagate library failures with `?` so benchmark
//! functions can report them in one place.

use gridspan_core::{GeneratorError, GraphError, GridError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A hand-assembled graph was rejected.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A spanning tree engine failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Planner configuration or planning failed.
    #[error("planning failed: {0}")]
    Grid(#[from] GridError),
    /// More edges were requested than a connected simple graph can hold.
    #[error("cannot place {requested} edges on {node_count} nodes")]
    EdgeCount {
        /// Requested number of edges.
        requested: usize,
        /// Node count of the requested graph.
        node_count: usize,
    },
}
