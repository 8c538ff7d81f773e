//! Seeds a git repository for tracker notes and exports.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    config::Config,
    errors::{TrackerError, TrackerResult},
    utils::paths::ensure_dir,
};

pub const README_FILE: &str = "README.md";
pub const README_CONTENTS: &str =
    "# Personal Finance Tracker\nThis project helps track and manage personal finances.";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Added README and setup repository";

/// Outcome of [`setup_repository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSetup {
    Initialized(PathBuf),
    AlreadyInitialized(PathBuf),
}

/// Optional commit identity; git's own configuration applies when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<&Config> for RepoIdentity {
    fn from(config: &Config) -> Self {
        Self {
            name: config.author_name.clone(),
            email: config.author_email.clone(),
        }
    }
}

/// Ensures `path` holds a git repository with a README and initial commit.
///
/// An existing `.git` directory is left untouched. The steps are not rolled
/// back: if `git add` or `git commit` fails (for example when no author
/// identity is configured), the `.git` directory stays behind and a later
/// call reports [`RepoSetup::AlreadyInitialized`] without committing. Fix the
/// git configuration and commit by hand in that case.
pub fn setup_repository(path: &Path, identity: &RepoIdentity) -> TrackerResult<RepoSetup> {
    ensure_dir(path)?;

    if path.join(".git").exists() {
        tracing::info!(path = %path.display(), "git repository already initialized");
        return Ok(RepoSetup::AlreadyInitialized(path.to_path_buf()));
    }

    run_git(path, identity, &["init"])?;
    fs::write(path.join(README_FILE), README_CONTENTS)?;
    run_git(path, identity, &["add", README_FILE])?;
    run_git(path, identity, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;

    tracing::info!(path = %path.display(), "git repository initialized");
    Ok(RepoSetup::Initialized(path.to_path_buf()))
}

fn run_git(dir: &Path, identity: &RepoIdentity, args: &[&str]) -> TrackerResult<()> {
    let mut command = Command::new("git");
    command.current_dir(dir).args(args);
    if let Some(name) = &identity.name {
        command
            .env("GIT_AUTHOR_NAME", name)
            .env("GIT_COMMITTER_NAME", name);
    }
    if let Some(email) = &identity.email {
        command
            .env("GIT_AUTHOR_EMAIL", email)
            .env("GIT_COMMITTER_EMAIL", email);
    }

    let label = args.first().copied().unwrap_or_default().to_string();
    let output = command.output().map_err(|err| TrackerError::Git {
        command: label.clone(),
        stderr: err.to_string(),
    })?;

    if output.status.success() {
        tracing::debug!(command = %label, "git command succeeded");
        Ok(())
    } else {
        Err(TrackerError::Git {
            command: label,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_repository_is_left_alone() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let outcome = setup_repository(temp.path(), &RepoIdentity::default()).unwrap();

        assert_eq!(outcome, RepoSetup::AlreadyInitialized(temp.path().to_path_buf()));
        assert!(!temp.path().join(README_FILE).exists());
    }

    #[test]
    fn failing_git_call_surfaces_git_error() {
        let temp = tempfile::tempdir().unwrap();
        let not_a_dir = temp.path().join("ledger.txt");
        fs::write(&not_a_dir, "plain file").unwrap();

        let err = setup_repository(&not_a_dir, &RepoIdentity::default()).unwrap_err();

        match err {
            TrackerError::Git { command, .. } => assert_eq!(command, "init"),
            other => panic!("expected git error, got {other:?}"),
        }
        assert!(!temp.path().join(README_FILE).exists());
    }

    #[test]
    fn identity_follows_config() {
        let config = Config {
            author_name: Some("Ada".into()),
            author_email: Some("ada@example.com".into()),
            ..Config::default()
        };
        let identity = RepoIdentity::from(&config);
        assert_eq!(identity.name.as_deref(), Some("Ada"));
        assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
    }
}
