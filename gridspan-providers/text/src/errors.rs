use gridspan_core::GraphError;
use thiserror::Error;

/// Errors raised while reading a grid file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum GridFileError {
    #[error("grid file contains no graph blocks")]
    EmptyInput,
    #[error("line {line}: expected header `<nodes> <redundancy>`, found `{content}`")]
    InvalidHeader { line: usize, content: String },
    #[error("line {line}: header declares {node_count} nodes; at most {max} are supported")]
    TooManyNodes {
        line: usize,
        node_count: usize,
        max: usize,
    },
    #[error("line {line}: expected edge `<source> <target> <weight>`, found `{content}`")]
    InvalidEdge { line: usize, content: String },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridFileError {
    /// Returns the 1-based line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidHeader { line, .. }
            | Self::TooManyNodes { line, .. }
            | Self::InvalidEdge { line, .. }
            | Self::Graph { line, .. } => Some(*line),
            Self::EmptyInput | Self::Io(_) => None,
        }
    }
}
