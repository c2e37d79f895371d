use crate::cli::support::{reposim, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Files command tests
// ============================================================================

#[test]
fn test_files_empty_pair_is_identical() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a/empty.txt", "");
    write_file(dir.path(), "b/other.txt", "\n\n   ");

    reposim(dir.path())
        .arg("files")
        .arg(dir.path().join("a/empty.txt"))
        .arg(dir.path().join("b/other.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000 (identical_empty)"));
}

#[test]
fn test_files_binary_is_unreadable() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "image.png", [137u8, 80, 78, 71, 0, 0]);
    write_file(dir.path(), "main.py", "print(1)");

    reposim(dir.path())
        .arg("files")
        .arg(dir.path().join("image.png"))
        .arg(dir.path().join("main.py"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0000 (unreadable:"))
        .stdout(predicate::str::contains("binary content"));
}

#[test]
fn test_files_json_score() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.py", "print(1)");
    write_file(dir.path(), "b.py", "print(2)");

    let output = reposim(dir.path())
        .args(["--format", "json", "files"])
        .arg(dir.path().join("a.py"))
        .arg(dir.path().join("b.py"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "scored");
    let score = json["score"].as_f64().unwrap();
    assert!((score - 0.336_097).abs() < 1e-5, "got {}", score);
    assert!(json["detail"].is_null());
}

#[test]
fn test_files_stemming_flag() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.md", "graphs");
    write_file(dir.path(), "b.md", "graph");

    reposim(dir.path())
        .arg("files")
        .arg(dir.path().join("a.md"))
        .arg(dir.path().join("b.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0000 (scored)"));

    reposim(dir.path())
        .args(["--stemming", "files"])
        .arg(dir.path().join("a.md"))
        .arg(dir.path().join("b.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000 (scored)"));
}

#[cfg(unix)]
#[test]
fn test_files_json_with_non_utf8_path() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let odd = dir
        .path()
        .join(std::ffi::OsStr::from_bytes(b"caf\xe9.py"));
    std::fs::write(&odd, "print(1)").unwrap();
    write_file(dir.path(), "plain.py", "print(1)");

    let output = reposim(dir.path())
        .args(["--format", "json", "files"])
        .arg(&odd)
        .arg(dir.path().join("plain.py"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["file1"].as_str().unwrap().ends_with("caf\u{fffd}.py"));
    assert_eq!(json["score"].as_f64().unwrap(), 1.0);
}
