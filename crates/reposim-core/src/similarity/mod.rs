//! Similarity engine for comparing repositories and the files they share

mod cosine;

mod file_pair;

mod repo;

mod tfidf;

pub use cosine::cosine_similarity;
pub use file_pair::{file_similarity, read_document, FileSimilarity, UnreadableReason};
pub use repo::{jaccard, repo_similarity, FileScore, RepoSimilarity};
pub use tfidf::{smoothed_idf, vectorize_pair, TermVectors, TermWeights};

use std::path::Path;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::filter::CodeFilter;
use crate::text::Tokenizer;

/// Similarity Engine
///
/// Holds the compiled filter and tokenizer for one run. It carries no state
/// between comparisons: every file pair gets a fresh vocabulary.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    exclude_names: Vec<String>,
    filter: CodeFilter,
    tokenizer: Tokenizer,
}

impl SimilarityEngine {
    /// Create a new Similarity Engine from a scan configuration
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(SimilarityEngine {
            exclude_names: config.exclude_names.clone(),
            filter: CodeFilter::new(&config.code_filter)?,
            tokenizer: Tokenizer::new(config.tokenizer),
        })
    }

    /// Compare one file across two locations
    pub fn file_similarity(&self, path_a: &Path, path_b: &Path) -> FileSimilarity {
        file_pair::file_similarity(path_a, path_b, &self.tokenizer)
    }

    /// Compare two repositories
    #[tracing::instrument(skip(self), fields(left = %left.display(), right = %right.display()))]
    pub fn repo_similarity(&self, left: &Path, right: &Path) -> Result<RepoSimilarity> {
        repo::repo_similarity(
            left,
            right,
            &self.exclude_names,
            &self.filter,
            &self.tokenizer,
        )
    }
}
