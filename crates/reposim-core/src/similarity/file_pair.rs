use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::similarity::cosine::cosine_similarity;
use crate::similarity::tfidf::{vectorize_pair, TermWeights};
use crate::text::Tokenizer;

/// Why a file could not be compared as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreadableReason {
    /// The read itself failed (missing, permission denied, a directory, ...)
    Io(String),
    /// Content is not valid UTF-8
    NotUtf8,
    /// Content contains NUL bytes
    Binary,
}

impl fmt::Display for UnreadableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreadableReason::Io(msg) => write!(f, "read failed: {}", msg),
            UnreadableReason::NotUtf8 => write!(f, "not valid UTF-8"),
            UnreadableReason::Binary => write!(f, "binary content"),
        }
    }
}

/// Result of comparing one file across two repositories
#[derive(Debug, Clone, PartialEq)]
pub enum FileSimilarity {
    /// Cosine similarity of the TF-IDF vectors
    Scored(f64),
    /// Both files are empty or whitespace-only
    IdenticalEmpty,
    /// One of the files could not be read as text
    Unreadable {
        path: PathBuf,
        reason: UnreadableReason,
    },
}

impl FileSimilarity {
    /// Numeric score used when aggregating: unreadable pairs count as 0.0
    pub fn score(&self) -> f64 {
        match self {
            FileSimilarity::Scored(score) => *score,
            FileSimilarity::IdenticalEmpty => 1.0,
            FileSimilarity::Unreadable { .. } => 0.0,
        }
    }

    /// Short identifier for the outcome
    pub fn kind(&self) -> &'static str {
        match self {
            FileSimilarity::Scored(_) => "scored",
            FileSimilarity::IdenticalEmpty => "identical_empty",
            FileSimilarity::Unreadable { .. } => "unreadable",
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileSimilarity::Unreadable { .. })
    }
}

/// Read a file as a text document
pub fn read_document(path: &Path) -> Result<String, UnreadableReason> {
    let bytes = fs::read(path).map_err(|e| UnreadableReason::Io(e.to_string()))?;
    if bytes.contains(&0) {
        return Err(UnreadableReason::Binary);
    }
    String::from_utf8(bytes).map_err(|_| UnreadableReason::NotUtf8)
}

/// Compare two files as text documents.
///
/// Never fails: a file that cannot be read as text yields
/// [`FileSimilarity::Unreadable`] naming the first offending path.
pub fn file_similarity(path_a: &Path, path_b: &Path, tokenizer: &Tokenizer) -> FileSimilarity {
    let texts = read_document(path_a)
        .map_err(|reason| (path_a, reason))
        .and_then(|a| {
            read_document(path_b)
                .map(|b| (a, b))
                .map_err(|reason| (path_b, reason))
        });

    let (text_a, text_b) = match texts {
        Ok(texts) => texts,
        Err((path, reason)) => {
            tracing::debug!(path = %path.display(), %reason, "unreadable_file");
            return FileSimilarity::Unreadable {
                path: path.to_path_buf(),
                reason,
            };
        }
    };

    match vectorize_pair(&text_a, &text_b, tokenizer) {
        TermWeights::IdenticalEmpty => FileSimilarity::IdenticalEmpty,
        TermWeights::Vectors(vectors) => {
            FileSimilarity::Scored(cosine_similarity(&vectors.left, &vectors.right))
        }
    }
}
