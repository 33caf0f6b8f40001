//! Command-line interface orchestration for gridspan.
//!
//! `run` plans every graph block of a grid file with the selected engine and
//! `generate` emits a seeded random grid file.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Command, EngineArg, ExecutionSummary, GenerateCommand, OutputFormat,
    PlannedBlock, RunCommand, RunSummary, run_cli,
};
pub use report::render_summary;

#[cfg(test)]
mod test_helpers;
