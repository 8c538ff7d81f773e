use std::process::Command;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use finance_tracker::repo::{
    setup_repository, RepoIdentity, RepoSetup, INITIAL_COMMIT_MESSAGE, README_CONTENTS,
    README_FILE,
};

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn identity() -> RepoIdentity {
    RepoIdentity {
        name: Some("Tracker Tests".into()),
        email: Some("tests@example.com".into()),
    }
}

#[test]
fn existing_repository_reports_already_initialized() {
    let temp = TempDir::new().unwrap();
    temp.child(".git").create_dir_all().unwrap();

    let outcome = setup_repository(temp.path(), &identity()).unwrap();

    assert_eq!(outcome, RepoSetup::AlreadyInitialized(temp.path().to_path_buf()));
    temp.child(README_FILE).assert(predicates::path::missing());
}

#[test]
fn fresh_directory_gets_readme_and_initial_commit() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let temp = TempDir::new().unwrap();
    let target = temp.child("finance_tracker_repo");

    let outcome = setup_repository(target.path(), &identity()).unwrap();

    assert_eq!(outcome, RepoSetup::Initialized(target.path().to_path_buf()));
    target.child(README_FILE).assert(README_CONTENTS);
    target.child(".git").assert(predicates::path::is_dir());

    let log = Command::new("git")
        .current_dir(target.path())
        .args(["log", "--format=%s"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), INITIAL_COMMIT_MESSAGE);

    let again = setup_repository(target.path(), &identity()).unwrap();
    assert!(matches!(again, RepoSetup::AlreadyInitialized(_)));
}
