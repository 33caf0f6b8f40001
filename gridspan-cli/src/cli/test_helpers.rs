//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::{EngineArg, OutputFormat, RunCommand, RunSummary, run_command};
use super::{CliError, ExecutionSummary, render_summary};

pub(super) const SCENARIO: &str = "\
# four substations
4 2
0 1 10
0 2 6
0 3 5
1 3 15
2 3 4
1 2 7
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_grid_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// A `run` command with the CLI defaults for everything but the path.
pub(super) fn run_args(path: PathBuf) -> RunCommand {
    RunCommand {
        path,
        engine: EngineArg::Kruskal,
        redundancy: None,
        min_weight: 1,
        max_weight: 20,
        format: OutputFormat::Human,
    }
}

pub(super) fn run_expecting_success(command: RunCommand) -> RunSummary {
    match run_command(command) {
        Ok(summary) => summary,
        Err(err) => panic!("run must succeed: {err}"),
    }
}

pub(super) fn run_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> io::Result<String> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
