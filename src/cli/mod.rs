//! CLI argument parsing for reposim
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --stemming, --stop-words

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Reposim - flag copied or closely derived repositories
#[derive(Parser, Debug)]
#[command(name = "reposim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `reposim_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "REPOSIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reduce terms to their English stem before weighting
    #[arg(long, global = true)]
    pub stemming: bool,

    /// Drop common English stop words before weighting
    #[arg(long, global = true)]
    pub stop_words: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare every pair of repositories under a directory
    Scan {
        /// Directory containing the repositories
        root: PathBuf,

        /// Repository name pattern (regex, matched at the start, case-insensitive)
        pattern: String,

        /// Directory levels searched for repositories
        #[arg(long)]
        depth: Option<usize>,

        /// List the most similar pairs first
        #[arg(long)]
        descending: bool,

        /// Show at most this many pairs
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Compare two repositories
    Compare {
        /// First repository
        repo1: PathBuf,

        /// Second repository
        repo2: PathBuf,

        /// List the score of every shared file
        #[arg(long)]
        files: bool,
    },

    /// Compare two files as text
    Files {
        /// First file
        file1: PathBuf,

        /// Second file
        file2: PathBuf,
    },

    /// Print the effective configuration
    Config,
}
