//! Reposim - pairwise repository similarity scanner
//!
//! Compares every pair of repositories under a directory by shared file
//! paths and by TF-IDF cosine similarity of the files they share.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use reposim_core::error::{ExitCode as ReposimExitCode, ReposimError};
use reposim_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(ReposimExitCode::Success as u8),
        Err(e) => report_failure(&cli, &e),
    }
}

/// Print a command failure in the requested format and pick the exit code
fn report_failure(cli: &Cli, error: &ReposimError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Argument errors happen before `Cli.format` exists, so the raw arguments
/// decide whether the error is rendered by clap or as a JSON envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !wants_json(env::args().skip(1)) {
        err.exit();
    }

    let error = ReposimError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn wants_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut after_format_flag = false;
    for arg in args {
        if arg == "--format=json" || (after_format_flag && arg == "json") {
            return true;
        }
        after_format_flag = arg == "--format";
    }
    false
}
