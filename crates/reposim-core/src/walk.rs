//! Directory traversal: repository discovery and file enumeration

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{ReposimError, Result};

fn ensure_dir(context: &str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ReposimError::not_found(context, path.display()))
    }
}

/// Relative path with `/` separators, independent of the host platform
fn to_relative_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Find directories under `root` whose name matches `pattern`.
///
/// Searches `max_depth` levels deep. Returned paths are relative to `root`
/// and ordered by name within each directory. Symlinked directories match
/// like real ones but are not searched below.
pub fn list_repos(root: &Path, pattern: &Regex, max_depth: usize) -> Result<Vec<PathBuf>> {
    ensure_dir("root directory", root)?;

    let mut repos = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skip_unreadable_entry");
                continue;
            }
        };

        // Follows symlinks, so a linked submission counts as a repository
        if !entry.path().is_dir() {
            continue;
        }

        if pattern.is_match(&entry.file_name().to_string_lossy()) {
            if let Ok(relative) = entry.path().strip_prefix(root) {
                repos.push(relative.to_path_buf());
            }
        }
    }

    Ok(repos)
}

/// List every regular file under `repo`, relative to it.
///
/// Directories and files named in `exclude_names` are skipped entirely.
/// A symlink to a file is listed under its own name; a symlinked directory
/// is never descended into.
pub fn list_files(repo: &Path, exclude_names: &[String]) -> Result<Vec<String>> {
    ensure_dir("repository", repo)?;

    let excluded = |name: &std::ffi::OsStr| {
        let name = name.to_string_lossy();
        exclude_names.iter().any(|x| *x == name)
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(repo)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !excluded(e.file_name()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skip_unreadable_entry");
                continue;
            }
        };

        if !entry.path().is_file() {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(repo) {
            files.push(to_relative_string(relative));
        }
    }

    Ok(files)
}
