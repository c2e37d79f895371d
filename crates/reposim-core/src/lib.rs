//! Reposim Core Library
//!
//! Similarity engine for spotting copied or closely derived repositories:
//! file-set overlap plus per-file TF-IDF cosine similarity.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod scan;
pub mod similarity;
pub mod text;
pub mod walk;
