use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use serde_json::Value;
use std::path::Path;

/// Commit date pinned by the fixtures (format `%Y-%m-%d %H:%M:%S %z`), so
/// commit oids stay reproducible across runs.
pub const PINNED_COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// The pinned date as `log` renders it.
pub const PINNED_COMMIT_DATE_READABLE: &str = "Sun Jan 1 12:00:00 2023 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_shelf_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_shelf_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    shelf_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    run_shelf_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (file_name, content, message) in [
        ("file1.txt", "content 1", "First commit"),
        ("file2.txt", "content 2", "Second commit"),
        ("file3.txt", "content 3", "Third commit"),
        ("file4.txt", "content 4", "Fourth commit"),
    ] {
        let file = FileSpec::new(repository_dir.path().join(file_name), content.to_string());
        write_file(file);

        run_shelf_command(repository_dir.path(), &["add", file_name])
            .assert()
            .success();
        shelf_commit(repository_dir.path(), message)
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_shelf_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("shelf").expect("Failed to find shelf binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn shelf_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_shelf_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![("SHELF_COMMIT_DATE", PINNED_COMMIT_DATE)]);
    cmd
}

/// Read the commit oid HEAD points at
pub fn read_head_oid(dir: &Path) -> String {
    let head_path = dir.join(".shelf").join("HEAD");
    std::fs::read_to_string(head_path)
        .expect("Failed to read HEAD file")
        .trim()
        .to_string()
}

/// Read the staging index as parsed JSON
pub fn read_index(dir: &Path) -> Value {
    let index_path = dir.join(".shelf").join("index");
    let raw = std::fs::read_to_string(index_path).expect("Failed to read index file");
    serde_json::from_str(&raw).expect("Index file is not valid JSON")
}

/// Paths recorded in the staging index, in staging order
pub fn read_index_paths(dir: &Path) -> Vec<String> {
    read_index(dir)
        .as_array()
        .expect("Index file is not a JSON array")
        .iter()
        .map(|entry| {
            entry["path"]
                .as_str()
                .expect("Index entry has no path")
                .to_string()
        })
        .collect()
}

/// Blob oids recorded in the staging index, in staging order
pub fn read_index_oids(dir: &Path) -> Vec<String> {
    read_index(dir)
        .as_array()
        .expect("Index file is not a JSON array")
        .iter()
        .map(|entry| {
            entry["oid"]
                .as_str()
                .expect("Index entry has no oid")
                .to_string()
        })
        .collect()
}

/// Read a stored commit record as parsed JSON
pub fn read_commit_record(dir: &Path, oid: &str) -> Value {
    let object_path = dir.join(".shelf").join("objects").join(oid);
    let raw = std::fs::read(object_path).expect("Failed to read object file");
    serde_json::from_slice(&raw).expect("Object is not a JSON commit record")
}

/// Walk the commit chain from HEAD, newest first
pub fn commit_chain_from_head(dir: &Path) -> Vec<(String, Value)> {
    let mut chain = Vec::new();
    let mut current = Some(read_head_oid(dir));

    while let Some(oid) = current {
        let record = read_commit_record(dir, &oid);
        current = record["parent"].as_str().map(|parent| parent.to_string());
        chain.push((oid, record));
    }

    chain
}
