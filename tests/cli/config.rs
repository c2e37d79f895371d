use crate::cli::support::{example_corpus, reposim, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_depth = 1"))
        .stdout(predicate::str::contains("exclude_names"))
        .stdout(predicate::str::contains("\".git\""))
        .stdout(predicate::str::contains("stemming = false"));
}

#[test]
fn test_config_file_from_config_dir() {
    let config = tempdir().unwrap();
    write_file(
        config.path(),
        "config.toml",
        "max_depth = 4\n[tokenizer]\nstop_words = true\n",
    );

    let output = reposim(config.path())
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["max_depth"], 4);
    assert_eq!(json["tokenizer"]["stop_words"], true);
    assert_eq!(json["tokenizer"]["stemming"], false);
}

#[test]
fn test_explicit_config_missing() {
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("--config")
        .arg(config.path().join("nope.toml"))
        .arg("config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_custom_code_filter_changes_structure_score() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();
    // Excluding extra.py makes repo-c structurally identical to the others
    write_file(config.path(), "config.toml", "code_filter = \"extra\"\n");

    reposim(config.path())
        .args(["--format", "records", "scan"])
        .arg(corpus.path())
        .arg("repo")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 0.5000 ").not());
}

#[test]
fn test_invalid_code_filter_is_usage_error() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();
    write_file(config.path(), "config.toml", "code_filter = \"[\"\n");

    reposim(config.path())
        .arg("scan")
        .arg(corpus.path())
        .arg("repo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid code filter"));
}
