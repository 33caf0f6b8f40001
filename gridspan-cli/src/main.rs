//! The `gridspan` binary.
//!
//! Reports go to stdout. A failed command is logged once with its stable
//! error code and the process exits with status 1.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use gridspan_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{LoggingError, init_logging},
};
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        print_logging_failure(&err);
        return ExitCode::FAILURE;
    }
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("gridspan command failed")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("could not write the report")?;
    out.flush().context("could not flush stdout")
}

fn log_failure(err: &anyhow::Error) {
    let code = err.downcast_ref::<CliError>().and_then(CliError::code);
    let chain = format!("{err:#}");
    error!(
        error = chain.as_str(),
        code = code.map(field::display),
        "command execution failed"
    );
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable when its own setup fails"
)]
fn print_logging_failure(err: &LoggingError) {
    eprintln!("gridspan: logging setup failed: {err}");
}
