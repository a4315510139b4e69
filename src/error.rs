//! Error types for copilot-review modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to determine current branch: {0}")]
    CurrentBranch(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to compute diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("File '{path}' not found at '{rev}'")]
    BlobNotFound { path: String, rev: String },
}

/// Errors from writing prompt files and housekeeping.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read .gitignore: {0}")]
    ReadGitignore(#[source] std::io::Error),

    #[error("Failed to write .gitignore: {0}")]
    WriteGitignore(#[source] std::io::Error),

    #[error("Failed to write prompt file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move prompt file into place at {}: {source}", path.display())]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a review run.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
