use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", message]);
}

fn sample_repo(dir: &Path) {
    init_git_repo(dir);
    let lib = "pub fn a() {}\npub fn b() {}\n";
    let test = "#[test]\nfn t() {}\n";
    let license = "MIT License\n\nCopyright (c) 2024\n";
    commit_file(dir, "src/lib.rs", lib, "feat: add library");
    commit_file(dir, "tests/it.rs", test, "test: cover library");
    commit_file(dir, "LICENSE", license, "chore: license");
}

fn json_report(dir: &Path) -> serde_json::Value {
    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.arg("--repo").arg(dir).arg("--json");
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn json_report_describes_the_repository() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let v = json_report(dir.path());
    assert_eq!(v["version"], 1);
    assert_eq!(v["identity"]["branch"], "main");
    assert_eq!(v["identity"]["commit_count"], 3);
    assert_eq!(v["identity"]["user_name"], "Your Name");
    assert_eq!(v["identity"]["status"], "clean");
    assert_eq!(v["identity"]["last_commit_message"], "chore: license");
    assert_eq!(v["identity"]["created"], "today");
    assert_eq!(v["code"]["languages"][0]["name"], "Rust");
    assert_eq!(v["code"]["file_count"], 3);
    assert_eq!(v["code"]["loc"], 4);
    assert_eq!(v["code"]["test_ratio"]["test_lines"], 2);
    assert_eq!(v["contributors"]["total"], 1);
    assert_eq!(v["contributors"]["top"][0]["commits"], 3);
    assert_eq!(v["last_activity"], "today");
    assert_eq!(v["velocity"]["weeks"].as_array().unwrap().len(), 8);
    assert_eq!(v["velocity"]["weeks"][7], 3);
    assert_eq!(v["license"], "MIT");
    assert_eq!(v["commit_convention"], "conventional (100%)");
    assert_eq!(v["stash_count"], 0);
    assert!(v["dependencies"].is_null());
    assert!(v.get("commit_dates").is_none());
}

#[test]
fn feature_branch_reports_divergence() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());
    git(dir.path(), &["checkout", "-b", "feature"]);
    commit_file(dir.path(), "src/extra.rs", "pub fn c() {}\n", "feat: extra");
    git(dir.path(), &["tag", "v0.1.0"]);

    let v = json_report(dir.path());
    assert_eq!(v["branches"]["total"], 2);
    assert_eq!(v["branches"]["ahead_behind"]["base"], "main");
    assert_eq!(v["branches"]["ahead_behind"]["ahead"], 1);
    assert_eq!(v["branches"]["ahead_behind"]["behind"], 0);
    assert_eq!(v["latest_tag"], "v0.1.0");
    assert_eq!(v["releases"][0]["tag"], "v0.1.0");
}

#[test]
fn terminal_summary_has_every_section() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.env("NO_COLOR", "1").arg("--repo").arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    for needle in [
        "Repository:",
        "Branch:       main (3 commits)",
        "License:      MIT",
        "Top Authors",
        "Hot Files (90 days)",
        "Commit Activity (past year)",
        "Less",
    ] {
        assert!(text.contains(needle), "missing {needle:?} in:\n{text}");
    }
}

#[test]
fn relative_repo_path_resolves_from_the_working_directory() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());

    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.current_dir(dir.path()).args(["--repo", "src", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["identity"]["commit_count"], 3);
    assert_eq!(v["code"]["file_count"], 3);
}

#[test]
fn dot_repo_without_remote_is_named_after_its_directory() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    sample_repo(dir.path());
    let root = fs::canonicalize(dir.path()).unwrap();

    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.current_dir(dir.path()).args(["--repo", ".", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let name = root.file_name().unwrap().to_str().unwrap();
    assert_eq!(v["identity"]["repo_name"], name);
    let reported = v["repository_path"].as_str().unwrap();
    assert!(Path::new(reported).is_absolute(), "{reported}");
    assert_eq!(fs::canonicalize(reported).unwrap(), root);
}

#[test]
fn outside_a_repository_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.arg("--repo").arg(dir.path());
    let output = cmd.assert().failure().get_output().clone();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not a git repository"), "{stderr}");
}

#[test]
fn short_version_flag() {
    let mut cmd = Command::cargo_bin("gitglance").unwrap();
    cmd.arg("-v");
    let out = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(
        String::from_utf8(out).unwrap().trim(),
        format!("gitglance {}", env!("CARGO_PKG_VERSION"))
    );
}
