//! Commit listing between two refs.

use git2::{Repository, Sort};

use crate::error::GitError;

/// A commit as shown in a one-line log: abbreviated hash and subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub message: String,
}

impl Commit {
    /// Create a Commit from a git2 Commit.
    pub fn from_git2_commit(commit: &git2::Commit) -> Result<Self, GitError> {
        let short_id = commit
            .as_object()
            .short_id()
            .map_err(GitError::ParseCommit)?;
        let hash = short_id
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| commit.id().to_string());
        let message = commit.summary().unwrap_or("").trim().to_string();

        Ok(Self { hash, message })
    }
}

/// Fetch the non-merge commits reachable from `to_oid` but not from `from_oid`.
///
/// Commits are returned newest first, matching `git log base..head --no-merges`.
pub fn fetch_commits(
    repo: &Repository,
    from_oid: git2::Oid,
    to_oid: git2::Oid,
) -> Result<Vec<Commit>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    revwalk.push(to_oid).map_err(GitError::RevwalkError)?;
    revwalk.hide(from_oid).map_err(GitError::RevwalkError)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        if commit.parent_count() > 1 {
            continue;
        }
        commits.push(Commit::from_git2_commit(&commit)?);
    }

    Ok(commits)
}
