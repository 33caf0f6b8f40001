//! Text provider for grid files.
//!
//! A grid file holds one or more graph blocks separated by blank lines.
//! Each block starts with a header `n k` (node count, redundant edges to
//! add) followed by one `source target weight` line per edge. Lines whose
//! first non-blank character is `#` are comments.
//!
//! ```text
//! # two-site feeder
//! 2 0
//! 0 1 7
//!
//! 4 2
//! 0 1 10
//! 2 3 4
//! 1 2 7
//! ```
mod errors;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Write},
    path::Path,
    str::FromStr,
};

use gridspan_core::{Edge, Graph, GraphError, NodeId, Weight};

pub use crate::errors::GridFileError;

/// Largest node count a block header may declare.
///
/// Planning allocates per-node state, so headers above this are rejected
/// before any edge is read.
pub const MAX_NODE_COUNT: usize = 1 << 20;

/// A graph together with the redundancy requested for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridInstance {
    graph: Graph,
    redundancy: usize,
}

impl GridInstance {
    /// Pairs a graph with its redundancy count.
    #[must_use]
    pub fn new(graph: Graph, redundancy: usize) -> Self {
        Self { graph, redundancy }
    }

    /// Returns the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns how many redundant edges the block asked for.
    #[must_use]
    #[rustfmt::skip]
    pub fn redundancy(&self) -> usize { self.redundancy }
}

/// Parsed contents of a grid file, in block order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridFile {
    instances: Vec<GridInstance>,
}

impl GridFile {
    /// Parses a grid file from `reader`.
    ///
    /// Parsing is strict: the first malformed header or edge line, or the
    /// first edge breaking a graph invariant, aborts with its line number.
    ///
    /// # Errors
    /// Returns [`GridFileError::EmptyInput`] when no block is present,
    /// [`GridFileError::InvalidHeader`] or [`GridFileError::InvalidEdge`] for
    /// malformed lines, [`GridFileError::TooManyNodes`] when a header declares
    /// more than [`MAX_NODE_COUNT`] nodes, [`GridFileError::Graph`] when a
    /// block does not form a valid graph, and [`GridFileError::Io`] when
    /// reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use gridspan_providers_text::GridFile;
    ///
    /// let file = GridFile::try_from_reader(Cursor::new("3 1\n0 1 4\n1 2 6\n0 2 9\n"))
    ///     .expect("grid file is valid");
    /// assert_eq!(file.len(), 1);
    /// assert_eq!(file.instances()[0].redundancy(), 1);
    /// assert_eq!(file.instances()[0].graph().edge_count(), 3);
    /// ```
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, GridFileError> {
        let mut instances = Vec::new();
        let mut block: Option<Block> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let trimmed = line.trim();

            if trimmed.starts_with('#') {
                continue;
            }
            if trimmed.is_empty() {
                if let Some(done) = block.take() {
                    instances.push(done.finish()?);
                }
                continue;
            }
            match block.as_mut() {
                Some(open) => open.push_edge(number, trimmed)?,
                None => block = Some(Block::from_header(number, trimmed)?),
            }
        }
        if let Some(done) = block {
            instances.push(done.finish()?);
        }

        if instances.is_empty() {
            return Err(GridFileError::EmptyInput);
        }
        Ok(Self { instances })
    }

    /// Opens and parses the grid file at `path`.
    ///
    /// # Errors
    /// Returns [`GridFileError::Io`] when the file cannot be opened, and
    /// otherwise fails like [`Self::try_from_reader`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GridFileError> {
        let file = File::open(path)?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Returns the parsed blocks.
    #[must_use]
    #[rustfmt::skip]
    pub fn instances(&self) -> &[GridInstance] { &self.instances }

    /// Consumes the file and returns its blocks.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_instances(self) -> Vec<GridInstance> { self.instances }

    /// Returns the number of blocks.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.instances.len() }

    /// Always `false` for a successfully parsed file.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.instances.is_empty() }
}

impl FromStr for GridFile {
    type Err = GridFileError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::try_from_reader(Cursor::new(raw))
    }
}

/// Writes `instances` in grid file format, separating blocks with a blank
/// line.
///
/// Output parses back with [`GridFile::try_from_reader`] into equal
/// instances.
///
/// # Errors
/// Propagates failures from `writer`.
///
/// # Examples
/// ```
/// use gridspan_core::Graph;
/// use gridspan_providers_text::{GridInstance, write_grid_file};
///
/// let graph = Graph::from_triples(2, &[(0, 1, 7)]).expect("graph is valid");
/// let mut out = Vec::new();
/// write_grid_file(&mut out, &[GridInstance::new(graph, 0)]).expect("write succeeds");
/// assert_eq!(String::from_utf8(out).expect("utf-8"), "2 0\n0 1 7\n");
/// ```
pub fn write_grid_file<W: Write>(mut writer: W, instances: &[GridInstance]) -> io::Result<()> {
    for (index, instance) in instances.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        let graph = instance.graph();
        writeln!(writer, "{} {}", graph.node_count(), instance.redundancy())?;
        for edge in graph.edges() {
            writeln!(writer, "{} {} {}", edge.source(), edge.target(), edge.weight())?;
        }
    }
    writer.flush()
}

/// A block whose edges are still being read.
struct Block {
    header_line: usize,
    node_count: usize,
    redundancy: usize,
    edges: Vec<Edge>,
    edge_lines: Vec<usize>,
}

impl Block {
    fn from_header(line: usize, content: &str) -> Result<Self, GridFileError> {
        let invalid = || GridFileError::InvalidHeader {
            line,
            content: content.to_owned(),
        };
        let [node_count, redundancy] = parse_fields::<2>(content).ok_or_else(invalid)?;
        let node_count: usize = node_count.parse().map_err(|_| invalid())?;
        if node_count > MAX_NODE_COUNT {
            return Err(GridFileError::TooManyNodes {
                line,
                node_count,
                max: MAX_NODE_COUNT,
            });
        }
        Ok(Self {
            header_line: line,
            node_count,
            redundancy: redundancy.parse().map_err(|_| invalid())?,
            edges: Vec::new(),
            edge_lines: Vec::new(),
        })
    }

    fn push_edge(&mut self, line: usize, content: &str) -> Result<(), GridFileError> {
        let invalid = || GridFileError::InvalidEdge {
            line,
            content: content.to_owned(),
        };
        let [source, target, weight] = parse_fields::<3>(content).ok_or_else(invalid)?;
        let source: NodeId = source.parse().map_err(|_| invalid())?;
        let target: NodeId = target.parse().map_err(|_| invalid())?;
        let weight: Weight = weight.parse().map_err(|_| invalid())?;
        self.edges.push(Edge::new(source, target, weight));
        self.edge_lines.push(line);
        Ok(())
    }

    fn finish(self) -> Result<GridInstance, GridFileError> {
        let Self {
            header_line,
            node_count,
            redundancy,
            edges,
            edge_lines,
        } = self;
        let graph = Graph::new(node_count, edges).map_err(|source| {
            let line = match &source {
                GraphError::InvalidNodeId { edge_index, .. }
                | GraphError::SelfLoop { edge_index, .. } => {
                    edge_lines.get(*edge_index).copied().unwrap_or(header_line)
                }
                _ => header_line,
            };
            GridFileError::Graph { line, source }
        })?;
        Ok(GridInstance::new(graph, redundancy))
    }
}

/// Splits `content` into exactly `N` whitespace-separated fields.
fn parse_fields<const N: usize>(content: &str) -> Option<[&str; N]> {
    let mut fields = content.split_whitespace();
    let parsed: [Option<&str>; N] = std::array::from_fn(|_| fields.next());
    if fields.next().is_some() {
        return None;
    }
    let mut out = [""; N];
    for (slot, field) in out.iter_mut().zip(parsed) {
        *slot = field?;
    }
    Some(out)
}
