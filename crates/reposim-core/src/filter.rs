//! Pattern-based exclusion of non-source files

use regex::{Regex, RegexBuilder};

use crate::error::{ReposimError, Result};

/// Compile `pattern` so that it must match at the start of the input,
/// ignoring case.
pub fn anchored_pattern(context: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})", pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| ReposimError::invalid_value(context, format!("{}: {}", pattern, e)))
}

/// Drops data files, licenses, test trees and documents from a file list
#[derive(Debug, Clone)]
pub struct CodeFilter {
    exclude: Regex,
}

impl CodeFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(CodeFilter {
            exclude: anchored_pattern("code filter", pattern)?,
        })
    }

    /// True when the relative path should take part in the comparison
    pub fn keeps(&self, relative_path: &str) -> bool {
        !self.exclude.is_match(relative_path)
    }

    pub fn apply(&self, files: Vec<String>) -> Vec<String> {
        files.into_iter().filter(|f| self.keeps(f)).collect()
    }
}
