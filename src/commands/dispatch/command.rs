//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use reposim_core::config::ScanConfig;
use reposim_core::error::Result;

/// Resolve the configuration file and apply global CLI overrides
pub fn resolve_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = ScanConfig::resolve(cli.config.as_deref())?;
    if cli.stemming {
        config.tokenizer.stemming = true;
    }
    if cli.stop_words {
        config.tokenizer.stop_words = true;
    }
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: ScanConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: ScanConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("reposim {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Pairwise similarity scanner for software repositories.");
        println!();
        println!("Run `reposim --help` for usage information.");
        Ok(())
    }
}
