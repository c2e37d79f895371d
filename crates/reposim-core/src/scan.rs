//! Corpus scanning: compare every pair of discovered repositories

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::{ReposimError, Result};
use crate::filter::anchored_pattern;
use crate::similarity::SimilarityEngine;
use crate::trace_time;
use crate::walk::list_repos;

/// One row of the result table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub repo1: PathBuf,
    pub repo2: PathBuf,
    /// Structural overlap (Jaccard of filtered file paths)
    pub sim_repo: f64,
    /// Mean content similarity of shared files
    pub sim_files: f64,
}

/// Row order of a scan table, by content score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Least similar pairs first
    #[default]
    Ascending,
    /// Most similar pairs first
    Descending,
}

/// Sort rows by content score. Stable: ties keep their current order.
pub fn sort_pairs(pairs: &mut [PairResult], order: SortOrder) {
    pairs.sort_by(|a, b| {
        let ord: Ordering = a.sim_files.total_cmp(&b.sim_files);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

/// Compare every unordered pair of `repos` (paths relative to `root`).
///
/// Pairs are generated as `(repos[i], repos[j])` with `i < j`, then sorted
/// ascending by content score.
pub fn every_repo_similarity(
    repos: &[PathBuf],
    root: &Path,
    engine: &SimilarityEngine,
) -> Result<Vec<PairResult>> {
    let n = repos.len();
    if n < 2 {
        return Err(ReposimError::InsufficientRepositories {
            found: n,
            root: root.to_path_buf(),
        });
    }

    let full_paths: Vec<PathBuf> = repos.iter().map(|repo| root.join(repo)).collect();

    let mut results = Vec::with_capacity(n * (n - 1) / 2);
    for (i, repo1) in full_paths.iter().enumerate() {
        for repo2 in &full_paths[i + 1..] {
            let sim = engine.repo_similarity(repo1, repo2)?;
            results.push(PairResult {
                repo1: repo1.clone(),
                repo2: repo2.clone(),
                sim_repo: sim.structural,
                sim_files: sim.content,
            });
        }
    }

    sort_pairs(&mut results, SortOrder::Ascending);
    Ok(results)
}

/// Result table of a corpus scan with the inputs that produced it
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub pattern: String,
    pub generated_at: DateTime<Utc>,
    /// Discovered repositories, relative to `root`, in discovery order
    pub repositories: Vec<PathBuf>,
    pub order: SortOrder,
    pub pairs: Vec<PairResult>,
}

impl ScanReport {
    /// Re-sort the table. Ascending is what [`scan`] produces.
    pub fn reorder(&mut self, order: SortOrder) {
        sort_pairs(&mut self.pairs, order);
        self.order = order;
    }

    /// Keep only the first `limit` rows
    pub fn truncate(&mut self, limit: usize) {
        self.pairs.truncate(limit);
    }
}

/// Discover repositories under `root` matching `pattern` and compare all pairs
#[tracing::instrument(skip(config), fields(root = %root.display(), pattern = %pattern, max_depth = config.max_depth))]
pub fn scan(root: &Path, pattern: &str, config: &ScanConfig) -> Result<ScanReport> {
    let start = Instant::now();

    config.validate()?;
    let name_pattern = anchored_pattern("repository pattern", pattern)?;
    let engine = SimilarityEngine::new(config)?;

    let repositories = list_repos(root, &name_pattern, config.max_depth)?;
    trace_time!(start, "discover_repos", found = repositories.len());
    tracing::debug!(found = repositories.len(), "discover_repos");

    let pairs = every_repo_similarity(&repositories, root, &engine)?;
    trace_time!(start, "compare_pairs", pairs = pairs.len());

    Ok(ScanReport {
        root: root.to_path_buf(),
        pattern: pattern.to_string(),
        generated_at: Utc::now(),
        repositories,
        order: SortOrder::Ascending,
        pairs,
    })
}
