//! `reposim files` command

use std::path::Path;

use reposim_core::error::Result;
use reposim_core::format::{escape_record_value, format_score};
use reposim_core::similarity::{FileSimilarity, SimilarityEngine};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

fn detail(outcome: &FileSimilarity) -> Option<String> {
    match outcome {
        FileSimilarity::Unreadable { path, reason } => {
            Some(format!("{}: {}", path.display(), reason))
        }
        _ => None,
    }
}

/// Execute the files command
pub fn execute(ctx: &CommandContext, file1: &Path, file2: &Path) -> Result<()> {
    let engine = SimilarityEngine::new(&ctx.config)?;
    let outcome = engine.file_similarity(file1, file2);

    match ctx.cli.format {
        OutputFormat::Human => match detail(&outcome) {
            Some(detail) => println!(
                "{} ({}: {})",
                format_score(outcome.score()),
                outcome.kind(),
                detail
            ),
            None => println!("{} ({})", format_score(outcome.score()), outcome.kind()),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file1": file1.display().to_string(),
                "file2": file2.display().to_string(),
                "score": outcome.score(),
                "kind": outcome.kind(),
                "detail": detail(&outcome),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => println!(
            "F {} {} {} {}",
            escape_record_value(&file1.display().to_string()),
            escape_record_value(&file2.display().to_string()),
            format_score(outcome.score()),
            outcome.kind()
        ),
    }

    Ok(())
}
