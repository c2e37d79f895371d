//! `reposim scan` command

mod format;

use std::path::Path;

use reposim_core::error::Result;
use reposim_core::scan::{scan, SortOrder};
use reposim_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Arguments of the scan command
pub struct ScanArgs<'a> {
    pub root: &'a Path,
    pub pattern: &'a str,
    pub depth: Option<usize>,
    pub descending: bool,
    pub limit: Option<usize>,
}

/// Execute the scan command
#[tracing::instrument(skip(ctx, args), fields(root = %args.root.display(), pattern = %args.pattern))]
pub fn execute(ctx: &CommandContext, args: &ScanArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }

    let mut report = scan(args.root, args.pattern, &config)?;
    trace_time!(ctx.start, "scan", pairs = report.pairs.len());

    if args.descending {
        report.reorder(SortOrder::Descending);
    }
    if let Some(limit) = args.limit {
        report.truncate(limit);
    }

    match ctx.cli.format {
        OutputFormat::Human => format::human::output(&report, ctx.cli.quiet),
        OutputFormat::Json => format::json::output(&report)?,
        OutputFormat::Records => format::records::output(&report),
    }

    Ok(())
}
