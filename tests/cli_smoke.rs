use assert_cmd::prelude::*;
use chrono::{TimeDelta, Utc};
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
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    commit_file_with_env(dir, name, content, &[]);
}

fn commit_file_with_env(dir: &Path, name: &str, content: &str, env: &[(&str, &str)]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("add {name}")])
        .envs(env.iter().copied())
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn localheat(registry: &Path) -> Command {
    let mut cmd = Command::cargo_bin("localheat").unwrap();
    cmd.arg("--registry").arg(registry).args(["--color", "never"]);
    cmd
}

#[test]
fn scan_records_repositories() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("code");
    fs::create_dir_all(root.join("alpha/.git")).unwrap();
    fs::create_dir_all(root.join("beta/vendor/gamma/.git")).unwrap();
    let registry = dir.path().join("registry");

    let out = localheat(&registry)
        .arg("scan")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();
    let alpha = fs::canonicalize(root.join("alpha")).unwrap();

    assert!(stdout.contains(&alpha.display().to_string()));
    assert!(stdout.contains("Successfully added"));
    assert_eq!(
        fs::read_to_string(&registry).unwrap(),
        format!("{}\n", alpha.display())
    );
}

#[test]
fn scanning_twice_does_not_duplicate() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("code");
    fs::create_dir_all(root.join("alpha/.git")).unwrap();
    let registry = dir.path().join("registry");

    localheat(&registry).arg("scan").arg(&root).assert().success();
    localheat(&registry).arg("scan").arg(&root).assert().success();

    let out = localheat(&registry)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn stats_renders_grid_for_author() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("repo");
    init_git_repo(&repo);
    commit_file(&repo, "src/a.rs", "fn a(){}\n");
    commit_file(&repo, "src/b.rs", "fn b(){}\n");
    let registry = dir.path().join("registry");
    localheat(&registry).arg("scan").arg(dir.path()).assert().success();

    let out = localheat(&registry)
        .args(["stats", "--email", "you@example.com"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines.iter().any(|l| l.starts_with(" Mon ")));
    assert!(lines.iter().any(|l| l.starts_with(" Wed ")));
    assert!(lines.iter().any(|l| l.starts_with(" Fri ")));
    assert!(stdout.contains("2 commits by you@example.com across 1 repositories"));
}

#[test]
fn stats_for_another_author_is_empty() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("repo");
    init_git_repo(&repo);
    commit_file(&repo, "lib.rs", "pub fn hi(){}\n");
    let registry = dir.path().join("registry");
    fs::write(&registry, format!("{}\n", repo.display())).unwrap();

    let out = localheat(&registry)
        .args(["stats", "--email", "someone@else.org"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("0 commits by someone@else.org"));
}

#[test]
fn stats_fails_on_a_broken_repository() {
    let dir = tempdir().unwrap();
    let not_a_repo = dir.path().join("plain");
    fs::create_dir_all(&not_a_repo).unwrap();
    let registry = dir.path().join("registry");
    fs::write(&registry, format!("{}\n", not_a_repo.display())).unwrap();

    localheat(&registry)
        .args(["stats", "--email", "you@example.com"])
        .assert()
        .failure();

    localheat(&registry)
        .args(["stats", "--email", "you@example.com", "--keep-going"])
        .assert()
        .success();
}

#[test]
fn stats_buckets_by_author_date() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("repo");
    init_git_repo(&repo);
    let a_year_ago = format!("@{} +0000", (Utc::now() - TimeDelta::days(365)).timestamp());
    commit_file_with_env(&repo, "old.rs", "fn old(){}\n", &[("GIT_AUTHOR_DATE", a_year_ago.as_str())]);
    let registry = dir.path().join("registry");
    fs::write(&registry, format!("{}\n", repo.display())).unwrap();

    let out = localheat(&registry)
        .args(["stats", "--email", "you@example.com"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("0 commits by you@example.com across 1 repositories"));
}

#[test]
fn scan_of_a_file_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "hello").unwrap();
    let registry = dir.path().join("registry");

    let out = localheat(&registry)
        .arg("scan")
        .arg(&file)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    assert!(!String::from_utf8(out).unwrap().contains("Successfully added"));
}

#[test]
fn color_flag_controls_headings() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("code");
    fs::create_dir_all(root.join("alpha/.git")).unwrap();
    let registry = dir.path().join("registry");

    let plain = localheat(&registry)
        .arg("scan")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(!String::from_utf8(plain).unwrap().contains('\u{1b}'));

    let colored = Command::cargo_bin("localheat")
        .unwrap()
        .arg("--registry")
        .arg(&registry)
        .args(["--color", "always", "scan"])
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(colored).unwrap().contains("\u{1b}["));
}
