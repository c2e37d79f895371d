//! Text processing utilities for tokenization

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::TokenizerConfig;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

/// Maximal runs of word characters
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

fn get_token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\w+").expect("static token pattern is valid"))
}

/// Lowercasing word tokenizer with optional stop word removal and stemming
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Tokenizer { config }
    }

    /// Split `text` into terms.
    ///
    /// Single-character tokens are kept so that `print(1)` and `print(2)`
    /// tokenize differently.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stop_words = get_stop_words();

        let tokens = get_token_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.config.stop_words || !stop_words.contains(t));

        if self.config.stemming {
            let stemmer = get_stemmer();
            tokens.map(|t| stemmer.stem(t).into_owned()).collect()
        } else {
            tokens.map(str::to_string).collect()
        }
    }
}

/// True when the text holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
