use crate::cli::support::{create_corpus, example_corpus, reposim};
use tempfile::TempDir;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Scan command tests
// ============================================================================

#[test]
fn test_scan_human_table_ascending() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .arg("scan")
        .arg(corpus.path())
        .arg("repo")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("repo1"));
    assert!(lines[0].ends_with("sim_files"));
    // Least similar pairs first: both pairs with repo-c, then (a, b)
    assert!(lines[1].contains("repo-c") && lines[1].contains("repo-a"));
    assert!(lines[2].contains("repo-c") && lines[2].contains("repo-b"));
    assert!(lines[3].contains("repo-a") && lines[3].contains("repo-b"));
    assert!(lines[3].ends_with("1.0000     1.0000"));
    assert!(stdout.contains("3 repositories, 3 pairs shown (least similar first)"));
}

#[test]
fn test_scan_descending_with_limit() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("--quiet")
        .arg("scan")
        .arg(corpus.path())
        .arg("repo")
        .args(["--descending", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-a"))
        .stdout(predicate::str::contains("repo-b"))
        .stdout(predicate::str::contains("repo-c").not())
        .stdout(predicate::str::contains("pairs shown").not());
}

#[test]
fn test_scan_json_report() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .args(["--format", "json", "scan"])
        .arg(corpus.path())
        .arg("REPO")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["order"], "ascending");
    assert_eq!(json["pattern"], "REPO");
    assert_eq!(json["repositories"].as_array().unwrap().len(), 3);

    let pairs = json["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 3);

    let scores: Vec<f64> = pairs
        .iter()
        .map(|p| p["sim_files"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    assert!((scores[2] - 1.0).abs() < 1e-9);
    assert_eq!(pairs[0]["sim_repo"].as_f64().unwrap(), 0.5);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_scan_records_output() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .args(["--format", "records", "scan"])
        .arg(corpus.path())
        .arg("repo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("H reposim=1 records=1 mode=scan"));
    assert!(lines[0].contains("repos=3 pairs=3 order=ascending"));
    assert!(lines[1..].iter().all(|l| l.starts_with("P ")));
    assert!(lines[3].ends_with(" 1.0000 1.0000"));
}

#[test]
fn test_scan_row_count_for_five_repositories() {
    let corpus = create_corpus(&[
        ("s1", &[("a.py", "a = 1")]),
        ("s2", &[("a.py", "a = 2")]),
        ("s3", &[("a.py", "a = 3")]),
        ("s4", &[("b.py", "b = 1")]),
        ("s5", &[]),
    ]);
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .args(["--format", "records", "scan"])
        .arg(corpus.path())
        .arg("s")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("P ")).count(), 10);
}

#[test]
fn test_scan_single_repository_fails() {
    let corpus = create_corpus(&[("repo-a", &[("main.py", "print(1)")]), ("other", &[])]);
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("scan")
        .arg(corpus.path())
        .arg("repo")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("only 1 repositories"));
}

#[test]
fn test_scan_single_repository_json_error() {
    let corpus = create_corpus(&[("repo-a", &[("main.py", "print(1)")])]);
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .args(["--format", "json", "scan"])
        .arg(corpus.path())
        .arg("repo")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "insufficient_repositories");
    assert_eq!(json["error"]["found"], 1);
}

#[test]
fn test_scan_invalid_pattern_is_usage_error() {
    let corpus = example_corpus();
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("scan")
        .arg(corpus.path())
        .arg("repo(")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid repository pattern"));
}

#[test]
fn test_scan_missing_root() {
    let config = tempdir().unwrap();

    reposim(config.path())
        .args(["scan", "/definitely/not/a/corpus", "repo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("root directory not found"));
}

#[test]
fn test_scan_depth_reaches_nested_repositories() {
    let corpus = create_corpus(&[
        ("cohort-1/team-a", &[("main.py", "x = 1")]),
        ("cohort-2/team-b", &[("main.py", "x = 1")]),
    ]);
    let config = tempdir().unwrap();

    reposim(config.path())
        .arg("scan")
        .arg(corpus.path())
        .arg("team")
        .assert()
        .code(3);

    reposim(config.path())
        .args(["--format", "records", "scan"])
        .arg(corpus.path())
        .arg("team")
        .args(["--depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repos=2 pairs=1"));
}

#[cfg(unix)]
#[test]
fn test_scan_corpus_of_symlinked_repositories() {
    let submissions = example_corpus();
    let corpus = TempDir::new().unwrap();
    for name in ["repo-a", "repo-b", "repo-c"] {
        std::os::unix::fs::symlink(submissions.path().join(name), corpus.path().join(name))
            .unwrap();
    }
    let config = tempdir().unwrap();

    let output = reposim(config.path())
        .args(["--format", "records", "scan"])
        .arg(corpus.path())
        .arg("repo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repos=3 pairs=3"));
    assert!(stdout.lines().last().unwrap().ends_with(" 1.0000 1.0000"));
}
