//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Paths matching this pattern (anchored at the start, case-insensitive) are
/// left out of the comparison: data files, licenses, validation and test trees,
/// documents.
pub const DEFAULT_CODE_FILTER: &str =
    r".*csv|.*rds|.*validate.*|.*xlsx|.*LICENSE|tests.*|.*pdf";

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory and file names skipped while enumerating a repository
    #[serde(default = "default_exclude_names")]
    pub exclude_names: Vec<String>,

    /// Exclusion pattern applied to relative file paths
    #[serde(default = "default_code_filter")]
    pub code_filter: String,

    /// How many directory levels below the root are searched for repositories
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Tokenizer options
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Tokenizer options applied to both documents of a file pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Drop common English stop words
    #[serde(default)]
    pub stop_words: bool,

    /// Reduce terms to their English stem
    #[serde(default)]
    pub stemming: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            exclude_names: default_exclude_names(),
            code_filter: default_code_filter(),
            max_depth: default_max_depth(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

fn default_exclude_names() -> Vec<String> {
    vec![".git".to_string()]
}

fn default_code_filter() -> String {
    DEFAULT_CODE_FILTER.to_string()
}

fn default_max_depth() -> usize {
    1
}
