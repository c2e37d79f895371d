//! `reposim config` command

use reposim_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Print the effective configuration
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
        OutputFormat::Human | OutputFormat::Records => print!("{}", ctx.config.to_toml_string()?),
    }
    Ok(())
}
