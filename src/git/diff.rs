//! Tree-to-tree diffs between two commits using git2.

use git2::{Diff, DiffFindOptions, DiffFormat, DiffOptions, Oid, Repository, Tree};

use crate::error::GitError;

fn commit_tree(repo: &Repository, oid: Oid) -> Result<Tree<'_>, GitError> {
    repo.find_commit(oid)
        .and_then(|c| c.tree())
        .map_err(GitError::ParseCommit)
}

/// Paths that differ between two commits, in git's diff order.
///
/// Equivalent to `git diff --name-only from..to`. Renamed files are reported
/// once under their new path, deleted files under their old path.
pub fn changed_paths(repo: &Repository, from: Oid, to: Oid) -> Result<Vec<String>, GitError> {
    let old_tree = commit_tree(repo, from)?;
    let new_tree = commit_tree(repo, to)?;

    let mut diff = repo
        .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)
        .map_err(GitError::DiffFailed)?;
    diff.find_similar(Some(DiffFindOptions::new().renames(true)))
        .map_err(GitError::DiffFailed)?;

    let paths = diff
        .deltas()
        .filter_map(|delta| {
            delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().to_string())
        })
        .filter(|p| !p.is_empty())
        .collect();

    Ok(paths)
}

/// Unified diff text for a single path between two commits.
///
/// The text carries the `diff --git` header, hunk headers and `+`/`-`/context
/// lines, as `git diff from..to -- <path>` prints them.
pub fn file_diff(repo: &Repository, from: Oid, to: Oid, path: &str) -> Result<String, GitError> {
    let old_tree = commit_tree(repo, from)?;
    let new_tree = commit_tree(repo, to)?;

    let mut opts = DiffOptions::new();
    opts.pathspec(path).disable_pathspec_match(true);

    let diff = repo
        .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))
        .map_err(GitError::DiffFailed)?;

    patch_text(&diff)
}

/// Render a diff as patch text.
fn patch_text(diff: &Diff<'_>) -> Result<String, GitError> {
    let mut text = String::new();

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        // Include the origin character for content lines
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(GitError::DiffFailed)?;

    Ok(text)
}

/// Content of `path` as stored at `rev`.
///
/// Equivalent to `git show rev:path`. Non-UTF-8 bytes are replaced.
pub fn file_content(repo: &Repository, rev: &str, path: &str) -> Result<String, GitError> {
    let not_found = || GitError::BlobNotFound {
        path: path.to_string(),
        rev: rev.to_string(),
    };

    let object = repo
        .revparse_single(&format!("{rev}:{path}"))
        .map_err(|_| not_found())?;
    let blob = object.peel_to_blob().map_err(|_| not_found())?;

    Ok(String::from_utf8_lossy(blob.content()).to_string())
}
