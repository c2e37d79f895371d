//! `reposim compare` command

use std::path::Path;

use reposim_core::error::Result;
use reposim_core::format::{escape_record_value, format_score};
use reposim_core::similarity::{RepoSimilarity, SimilarityEngine};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the compare command
pub fn execute(ctx: &CommandContext, repo1: &Path, repo2: &Path, show_files: bool) -> Result<()> {
    let engine = SimilarityEngine::new(&ctx.config)?;
    let sim = engine.repo_similarity(repo1, repo2)?;

    match ctx.cli.format {
        OutputFormat::Human => output_human(&sim, show_files, ctx.cli.quiet),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&sim)?;
            value["repo1"] = repo1.display().to_string().into();
            value["repo2"] = repo2.display().to_string().into();
            if !show_files {
                if let Some(obj) = value.as_object_mut() {
                    obj.remove("file_scores");
                }
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Records => print!("{}", render_records(repo1, repo2, &sim, show_files)),
    }

    Ok(())
}

fn output_human(sim: &RepoSimilarity, show_files: bool, quiet: bool) {
    let union = sim.files_left + sim.files_right - sim.common;
    println!("sim_repo:  {}", format_score(sim.structural));
    println!("sim_files: {}", format_score(sim.content));

    if !quiet {
        println!();
        println!(
            "{} shared of {} distinct files ({} left, {} right), {} unreadable",
            sim.common, union, sim.files_left, sim.files_right, sim.unreadable
        );
    }

    if show_files && !sim.file_scores.is_empty() {
        println!();
        for file in &sim.file_scores {
            match &file.detail {
                Some(detail) => println!(
                    "  {}  {} [{}: {}]",
                    format_score(file.score),
                    file.path,
                    file.kind,
                    detail
                ),
                None => println!(
                    "  {}  {} [{}]",
                    format_score(file.score),
                    file.path,
                    file.kind
                ),
            }
        }
    }
}

fn render_records(repo1: &Path, repo2: &Path, sim: &RepoSimilarity, show_files: bool) -> String {
    let mut out = format!(
        "H reposim=1 records=1 mode=compare repo1={} repo2={} sim_repo={} sim_files={} common={} unreadable={}\n",
        escape_record_value(&repo1.display().to_string()),
        escape_record_value(&repo2.display().to_string()),
        format_score(sim.structural),
        format_score(sim.content),
        sim.common,
        sim.unreadable
    );

    if show_files {
        for file in &sim.file_scores {
            out.push_str(&format!(
                "F {} {} {}\n",
                escape_record_value(&file.path),
                format_score(file.score),
                file.kind
            ));
        }
    }

    out
}
