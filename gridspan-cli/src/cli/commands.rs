//! Command implementations and argument parsing for the gridspan CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use gridspan_core::{
    GeneratorConfig, GeneratorError, GridError, GridPlan, GridPlannerBuilder, MstStrategy,
    Weight, WeightRange, generate_graph,
};
use gridspan_providers_text::{GridFile, GridFileError, GridInstance};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_MIN_WEIGHT: Weight = 1;
const DEFAULT_MAX_WEIGHT: Weight = 20;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "gridspan",
    about = "Plan minimum-cost power grid layouts with optional redundant links."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Plan every graph in a grid file.
    Run(RunCommand),
    /// Write a random grid file to stdout.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a grid file.
    pub path: PathBuf,

    /// Spanning tree engine.
    #[arg(long, value_enum, default_value_t = EngineArg::Kruskal)]
    pub engine: EngineArg,

    /// Redundant links per graph; overrides the count in each block header.
    #[arg(long)]
    pub redundancy: Option<usize>,

    /// Smallest accepted edge weight.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: Weight,

    /// Largest accepted edge weight.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: Weight,

    /// Output format for the plan report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Number of distinct edges.
    #[arg(long)]
    pub edges: usize,

    /// Smallest generated edge weight.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT, allow_negative_numbers = true)]
    pub min_weight: Weight,

    /// Largest generated edge weight.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT, allow_negative_numbers = true)]
    pub max_weight: Weight,

    /// Redundancy count written into the block header.
    #[arg(long, default_value_t = 0)]
    pub redundancy: usize,

    /// Seed for the random source.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Spanning tree engines selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    /// Enumerate every edge subset.
    Exhaustive,
    /// Kruskal's greedy algorithm.
    Kruskal,
    /// Prim's algorithm from node 0.
    Prim,
}

impl From<EngineArg> for MstStrategy {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Exhaustive => Self::Exhaustive,
            EngineArg::Kruskal => Self::Kruskal,
            EngineArg::Prim => Self::Prim,
        }
    }
}

/// Report formats for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals.
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The grid file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The grid file was malformed.
    #[error("failed to parse `{path}`: {source}")]
    GridFile {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: GridFileError,
    },
    /// Planning a graph block failed.
    #[error("graph {block} could not be planned: {source}")]
    Plan {
        /// One-based index of the failing block.
        block: usize,
        /// Planner failure.
        #[source]
        source: GridError,
    },
    /// Planner configuration was rejected before any block was read.
    #[error(transparent)]
    Config(#[from] GridError),
    /// Random graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Plan { source, .. } | Self::Config(source) => Some(source.code().as_str()),
            Self::Generator(source) => Some(source.code().as_str()),
            Self::Io { .. } | Self::GridFile { .. } => None,
        }
    }
}

/// A planned graph block together with its position in the file.
#[derive(Debug, Clone)]
pub struct PlannedBlock {
    /// One-based block index.
    pub block: usize,
    /// Resulting plan.
    pub plan: GridPlan,
}

/// Outcome of the `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Name derived from the grid file path.
    pub source: String,
    /// Requested report format.
    pub format: OutputFormat,
    /// Plans in file order.
    pub blocks: Vec<PlannedBlock>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Plans produced by `run`.
    Run(RunSummary),
    /// Grid instance produced by `generate`.
    Generate(GridInstance),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, planning, or generation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use gridspan_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 5,
///         edges: 7,
///         min_weight: 1,
///         max_weight: 20,
///         redundancy: 1,
///         seed: 3,
///     }),
/// };
/// let ExecutionSummary::Generate(instance) = run_cli(cli)? else {
///     panic!("generate yields a grid instance");
/// };
/// assert_eq!(instance.graph().edge_count(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(&generate).map(ExecutionSummary::Generate)
        }
    }
}

#[instrument(
    name = "cli.plan_file",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        engine = field::Empty,
        redundancy_override = field::Empty,
        blocks = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let RunCommand {
        path,
        engine,
        redundancy,
        min_weight,
        max_weight,
        format,
    } = command;
    let strategy = MstStrategy::from(engine);
    let span = Span::current();
    span.record("engine", field::display(strategy));
    span.record(
        "redundancy_override",
        field::display(redundancy.map_or_else(|| "<file>".to_owned(), |k| k.to_string())),
    );

    let weight_range = WeightRange::new(min_weight, max_weight).map_err(GridError::from)?;
    let builder = GridPlannerBuilder::new()
        .with_strategy(strategy)
        .with_weight_range(weight_range);

    let file = load_grid_file(&path)?;
    span.record("blocks", file.len());

    let mut blocks = Vec::with_capacity(file.len());
    for (index, instance) in file.instances().iter().enumerate() {
        let block = index + 1;
        let k = redundancy.unwrap_or_else(|| instance.redundancy());
        let plan = builder
            .clone()
            .with_redundancy(k)
            .build()
            .and_then(|planner| planner.plan(instance.graph()))
            .map_err(|source| CliError::Plan { block, source })?;
        blocks.push(PlannedBlock { block, plan });
    }

    let source = derive_source_name(&path);
    info!(source = source.as_str(), blocks = blocks.len(), "run completed");
    Ok(RunSummary {
        source,
        format,
        blocks,
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, edges = command.edges, seed = command.seed),
)]
pub(super) fn generate_command(command: &GenerateCommand) -> Result<GridInstance, CliError> {
    let config = GeneratorConfig::new(command.nodes, command.edges)
        .with_weight_range(command.min_weight..=command.max_weight)
        .with_seed(command.seed);
    let graph = generate_graph(&config)?;
    info!(edges = graph.edge_count(), "generate completed");
    Ok(GridInstance::new(graph, command.redundancy))
}

#[instrument(name = "cli.load_grid_file", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_grid_file(path: &Path) -> Result<GridFile, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    GridFile::try_from_reader(BufReader::new(file)).map_err(|source| CliError::GridFile {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "grid".to_owned(), ToOwned::to_owned)
}
