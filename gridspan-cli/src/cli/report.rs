//! Rendering of command results to stdout.

use std::io::{self, Write};

use gridspan_core::{Edge, NodeId, Weight, WeightSum};
use gridspan_providers_text::write_grid_file;
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat, PlannedBlock, RunSummary};

/// Renders `summary` to `writer`.
///
/// `run` summaries honour their [`OutputFormat`]; `generate` summaries are
/// written as a grid file.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gridspan_cli::cli::{ExecutionSummary, render_summary};
/// # use gridspan_core::Graph;
/// # use gridspan_providers_text::GridInstance;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_triples(3, &[(0, 1, 2), (1, 2, 3)])?;
/// let summary = ExecutionSummary::Generate(GridInstance::new(graph, 1));
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "3 1\n0 1 2\n1 2 3\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => match run.format {
            OutputFormat::Human => render_human(run, &mut writer),
            OutputFormat::Json => render_json(run, &mut writer),
        },
        ExecutionSummary::Generate(instance) => {
            write_grid_file(&mut writer, std::slice::from_ref(instance))
        }
    }
}

fn render_human(run: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", run.source)?;
    for PlannedBlock { block, plan } in &run.blocks {
        let coverage = if plan.is_spanning() {
            "spanning"
        } else {
            "disconnected"
        };
        writeln!(
            writer,
            "graph {block}: {} nodes, engine {}, {coverage}",
            plan.node_count(),
            plan.strategy(),
        )?;
        writeln!(writer, "  tree (weight {}):", plan.tree_weight())?;
        write_edges(writer, plan.tree_edges())?;
        writeln!(writer, "  redundancy (weight {}):", plan.redundancy_weight())?;
        write_edges(writer, plan.redundancy_edges())?;
        writeln!(writer, "  total weight: {}", plan.total_weight())?;
    }
    writer.flush()
}

fn write_edges(writer: &mut impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        writeln!(
            writer,
            "    {} {} {}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    graphs: Vec<JsonPlan>,
}

#[derive(Serialize)]
struct JsonPlan {
    block: usize,
    engine: &'static str,
    nodes: usize,
    spanning: bool,
    tree_weight: WeightSum,
    redundancy_weight: WeightSum,
    total_weight: WeightSum,
    tree: Vec<JsonEdge>,
    redundancy: Vec<JsonEdge>,
}

#[derive(Serialize)]
struct JsonEdge {
    source: NodeId,
    target: NodeId,
    weight: Weight,
}

impl From<&Edge> for JsonEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

impl From<&PlannedBlock> for JsonPlan {
    fn from(PlannedBlock { block, plan }: &PlannedBlock) -> Self {
        Self {
            block: *block,
            engine: plan.strategy().as_str(),
            nodes: plan.node_count(),
            spanning: plan.is_spanning(),
            tree_weight: plan.tree_weight(),
            redundancy_weight: plan.redundancy_weight(),
            total_weight: plan.total_weight(),
            tree: plan.tree_edges().iter().map(JsonEdge::from).collect(),
            redundancy: plan.redundancy_edges().iter().map(JsonEdge::from).collect(),
        }
    }
}

fn render_json(run: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    let report = JsonReport {
        source: &run.source,
        graphs: run.blocks.iter().map(JsonPlan::from).collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()
}
