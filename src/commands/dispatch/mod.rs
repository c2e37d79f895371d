//! Command dispatch logic for reposim

use std::time::Instant;

use crate::cli::{Cli, Commands};
use reposim_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{resolve_config, Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Scan {
                root,
                pattern,
                depth,
                descending,
                limit,
            } => crate::commands::scan::execute(
                ctx,
                &crate::commands::scan::ScanArgs {
                    root: root.as_path(),
                    pattern: pattern.as_str(),
                    depth: *depth,
                    descending: *descending,
                    limit: *limit,
                },
            ),
            Commands::Compare {
                repo1,
                repo2,
                files,
            } => crate::commands::compare::execute(ctx, repo1, repo2, *files),
            Commands::Files { file1, file2 } => {
                crate::commands::files::execute(ctx, file1, file2)
            }
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}
