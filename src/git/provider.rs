//! The narrow version-control interface the review run depends on.

use std::path::Path;

use git2::Repository;
use tracing::{debug, warn};

use crate::error::GitError;

use super::commits::{Commit, fetch_commits};
use super::diff::{changed_paths, file_content, file_diff};
use super::range::{current_branch, resolve_range};

/// Version-control queries used by a review run.
///
/// This abstraction allows mocking the repository in tests. Branch, commit
/// and changed-file queries are fatal on failure; the per-file queries
/// degrade to empty text.
#[cfg_attr(test, mockall::automock)]
pub trait VcsProvider {
    /// Name of the branch currently checked out.
    fn current_branch(&self) -> Result<String, GitError>;

    /// Non-merge commits on `head` that are not on `base`, newest first.
    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<Commit>, GitError>;

    /// Paths that differ between `base` and `head`.
    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>, GitError>;

    /// Diff text for one path, or an empty string if it cannot be produced.
    fn file_diff(&self, base: &str, head: &str, path: &str) -> String;

    /// Content of a path at a ref, or an empty string if it does not exist there.
    fn file_content(&self, path: &str, rev: &str) -> String;
}

/// [`VcsProvider`] backed by a git2 repository.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`, searching parent directories.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::OpenRepository)?;
        Ok(Self { repo })
    }

    fn try_file_diff(&self, base: &str, head: &str, path: &str) -> Result<String, GitError> {
        let range = resolve_range(&self.repo, base, head)?;
        file_diff(&self.repo, range.base, range.head, path)
    }
}

impl VcsProvider for GitRepository {
    fn current_branch(&self) -> Result<String, GitError> {
        current_branch(&self.repo)
    }

    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<Commit>, GitError> {
        let range = resolve_range(&self.repo, base, head)?;
        fetch_commits(&self.repo, range.base, range.head)
    }

    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>, GitError> {
        let range = resolve_range(&self.repo, base, head)?;
        changed_paths(&self.repo, range.base, range.head)
    }

    fn file_diff(&self, base: &str, head: &str, path: &str) -> String {
        self.try_file_diff(base, head, path).unwrap_or_else(|e| {
            warn!("Error getting diff for {}: {}", path, e);
            String::new()
        })
    }

    fn file_content(&self, path: &str, rev: &str) -> String {
        file_content(&self.repo, rev, path).unwrap_or_else(|e| {
            debug!("{}", e);
            String::new()
        })
    }
}
