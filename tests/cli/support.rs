use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for reposim, isolated from the user's configuration
pub fn reposim(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("reposim");
    cmd.env("REPOSIM_CONFIG_DIR", config_dir)
        .env_remove("REPOSIM_CONFIG")
        .env_remove("REPOSIM_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Build a corpus directory: one subdirectory per repository
pub fn create_corpus(repos: &[(&str, &[(&str, &str)])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (repo, files) in repos {
        fs::create_dir_all(dir.path().join(repo)).unwrap();
        for (name, content) in *files {
            write_file(&dir.path().join(repo), name, content);
        }
    }
    dir
}

/// The three-repository corpus: A and B identical, C a modified copy of A
pub fn example_corpus() -> TempDir {
    create_corpus(&[
        ("repo-a", &[("main.py", "print(1)")]),
        ("repo-b", &[("main.py", "print(1)")]),
        ("repo-c", &[("main.py", "print(2)"), ("extra.py", "")]),
    ])
}
