use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::filter::CodeFilter;
use crate::similarity::file_pair::{file_similarity, FileSimilarity};
use crate::text::Tokenizer;
use crate::walk::list_files;

/// Per-file entry of a repository comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    /// Path relative to both repository roots
    pub path: String,
    pub score: f64,
    /// Outcome kind: `scored`, `identical_empty` or `unreadable`
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileScore {
    fn new(path: String, outcome: &FileSimilarity) -> Self {
        let detail = match outcome {
            FileSimilarity::Unreadable { path, reason } => {
                Some(format!("{}: {}", path.display(), reason))
            }
            _ => None,
        };
        FileScore {
            path,
            score: outcome.score(),
            kind: outcome.kind(),
            detail,
        }
    }
}

/// Structural and content similarity of two repositories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoSimilarity {
    /// Jaccard overlap of the filtered file sets
    pub structural: f64,
    /// Mean similarity of the files present in both repositories
    pub content: f64,
    pub files_left: usize,
    pub files_right: usize,
    pub common: usize,
    /// Common files that could not be compared as text
    pub unreadable: usize,
    /// One entry per common file, in path order
    pub file_scores: Vec<FileScore>,
}

impl RepoSimilarity {
    /// The `(structural, content)` score pair
    pub fn scores(&self) -> (f64, f64) {
        (self.structural, self.content)
    }
}

/// Jaccard index `|A ∩ B| / |A ∪ B|`, 0.0 when both sets are empty
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let common = a.intersection(b).count();
    let union = a.len() + b.len() - common;
    if union == 0 {
        0.0
    } else {
        common as f64 / union as f64
    }
}

fn filtered_file_set(
    repo: &Path,
    exclude_names: &[String],
    filter: &CodeFilter,
) -> Result<BTreeSet<String>> {
    let files = list_files(repo, exclude_names)?;
    Ok(filter.apply(files).into_iter().collect())
}

/// Compare two repositories by shared file paths and shared file content
pub fn repo_similarity(
    left: &Path,
    right: &Path,
    exclude_names: &[String],
    filter: &CodeFilter,
    tokenizer: &Tokenizer,
) -> Result<RepoSimilarity> {
    let files_left = filtered_file_set(left, exclude_names, filter)?;
    let files_right = filtered_file_set(right, exclude_names, filter)?;

    let structural = jaccard(&files_left, &files_right);

    let outcomes: Vec<(&String, FileSimilarity)> = files_left
        .intersection(&files_right)
        .map(|relative| {
            let outcome = file_similarity(&left.join(relative), &right.join(relative), tokenizer);
            (relative, outcome)
        })
        .collect();

    let common = outcomes.len();
    let unreadable = outcomes.iter().filter(|(_, o)| o.is_unreadable()).count();
    let total: f64 = outcomes.iter().map(|(_, o)| o.score()).sum();
    let content = (total / common.max(1) as f64).max(0.0);

    let file_scores = outcomes
        .into_iter()
        .map(|(relative, outcome)| FileScore::new(relative.clone(), &outcome))
        .collect();

    tracing::debug!(
        left = %left.display(),
        right = %right.display(),
        structural,
        content,
        common,
        unreadable,
        "repo_similarity"
    );

    Ok(RepoSimilarity {
        structural,
        content,
        files_left: files_left.len(),
        files_right: files_right.len(),
        common,
        unreadable,
        file_scores,
    })
}
