use std::collections::{BTreeMap, BTreeSet};

use crate::text::{is_blank, Tokenizer};

/// Number of documents in every corpus the vectorizer sees: one file pair.
const PAIR_CORPUS_SIZE: f64 = 2.0;

/// Term-weight vectors for one pair of documents over their shared vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct TermVectors {
    /// Sorted union of the terms of both documents
    pub vocabulary: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Outcome of vectorizing a document pair
#[derive(Debug, Clone, PartialEq)]
pub enum TermWeights {
    /// Both documents are empty or whitespace-only; no vocabulary was built
    IdenticalEmpty,
    Vectors(TermVectors),
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// Always positive, so a term shared by every document still contributes.
pub fn smoothed_idf(total_docs: f64, df: f64) -> f64 {
    ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0
}

fn term_counts(tokens: Vec<String>) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for term in tokens {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

/// Build TF-IDF vectors for two documents.
///
/// The vocabulary and document frequencies come from these two documents only
/// and are dropped with the returned vectors.
pub fn vectorize_pair(left: &str, right: &str, tokenizer: &Tokenizer) -> TermWeights {
    if is_blank(left) && is_blank(right) {
        return TermWeights::IdenticalEmpty;
    }

    let left_counts = term_counts(tokenizer.tokenize(left));
    let right_counts = term_counts(tokenizer.tokenize(right));

    let vocabulary: Vec<String> = left_counts
        .keys()
        .chain(right_counts.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut left_vec = Vec::with_capacity(vocabulary.len());
    let mut right_vec = Vec::with_capacity(vocabulary.len());

    for term in &vocabulary {
        let tf_left = left_counts.get(term).copied().unwrap_or(0.0);
        let tf_right = right_counts.get(term).copied().unwrap_or(0.0);
        let df = [tf_left, tf_right].iter().filter(|&&tf| tf > 0.0).count() as f64;
        let idf = smoothed_idf(PAIR_CORPUS_SIZE, df);

        left_vec.push(tf_left * idf);
        right_vec.push(tf_right * idf);
    }

    TermWeights::Vectors(TermVectors {
        vocabulary,
        left: left_vec,
        right: right_vec,
    })
}
