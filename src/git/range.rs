//! Branch and reference resolution.

use git2::{ErrorCode, Oid, Repository};

use crate::error::GitError;

/// Resolved comparison between a base ref and the branch under review.
#[derive(Debug, Clone)]
pub struct BranchRange {
    pub base: Oid,
    pub head: Oid,
}

/// Resolve both ends of a `base..head` comparison.
pub fn resolve_range(repo: &Repository, base: &str, head: &str) -> Result<BranchRange, GitError> {
    Ok(BranchRange {
        base: resolve_reference(repo, base)?,
        head: resolve_reference(repo, head)?,
    })
}

/// Name of the currently checked-out branch.
///
/// A detached HEAD resolves to `HEAD`. An unborn branch (no commits yet) is
/// an error since there is nothing to compare.
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    let head = repo.head().map_err(|e| match e.code() {
        ErrorCode::UnbornBranch | ErrorCode::NotFound => GitError::CurrentBranch(e),
        _ => GitError::ReferenceNotFound("HEAD".to_string(), e),
    })?;

    if !head.is_branch() {
        return Ok("HEAD".to_string());
    }

    head.shorthand()
        .map(str::to_string)
        .ok_or_else(|| GitError::CurrentBranch(git2::Error::from_str("Branch name is not valid UTF-8")))
}

/// Resolve a reference (branch, tag, commit hash) to a commit OID.
pub fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    // Try as a reference (branch or tag)
    if let Ok(obj) = repo.revparse_single(reference) {
        return Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id());
    }

    Err(GitError::ReferenceNotFound(
        reference.to_string(),
        git2::Error::from_str("Reference not found"),
    ))
}
