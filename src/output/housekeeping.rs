//! Stale prompt cleanup and `.gitignore` maintenance.

use std::path::Path;

use tracing::debug;

use crate::error::OutputError;

/// File name prefixes of generated prompts.
const PROMPT_PREFIXES: &[&str] = &["summary-", "pr-description-", "batch-", "instructions-"];

/// Comment written above the ignore entry.
const GITIGNORE_COMMENT: &str = "# Copilot Code Reviewer generated files";

/// Ignore-file pattern for an output directory, e.g. `code-review-prompts/`.
pub fn gitignore_entry(output_dir: &Path) -> String {
    let dir = output_dir.to_string_lossy().replace('\\', "/");
    let dir = dir.trim_start_matches("./").trim_end_matches('/');
    format!("{dir}/")
}

/// Delete prompt files left in `dir` by earlier runs.
///
/// Only files whose names start with a generated-prompt prefix are removed.
/// A missing directory is not an error. Returns the number of files removed.
pub fn cleanup_old_files(dir: &Path) -> Result<usize, OutputError> {
    if !dir.exists() {
        return Ok(0);
    }

    let read_err = |source| OutputError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut stale = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if PROMPT_PREFIXES.iter().any(|p| name.starts_with(p)) {
            stale.push(entry.path());
        }
    }

    for path in &stale {
        debug!("Removing old prompt file {}", path.display());
        std::fs::remove_file(path).map_err(|source| OutputError::RemoveFile {
            path: path.clone(),
            source,
        })?;
    }

    Ok(stale.len())
}

/// Make sure `gitignore_path` ignores `entry`.
///
/// Existing content is preserved; a newline is added first if the file does
/// not already end with one. Returns true if the file was changed.
pub fn ensure_gitignore_entry(gitignore_path: &Path, entry: &str) -> Result<bool, OutputError> {
    let existing = if gitignore_path.exists() {
        std::fs::read_to_string(gitignore_path).map_err(OutputError::ReadGitignore)?
    } else {
        String::new()
    };

    if existing.contains(entry) {
        return Ok(false);
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(GITIGNORE_COMMENT);
    content.push('\n');
    content.push_str(entry);
    content.push('\n');

    std::fs::write(gitignore_path, content).map_err(OutputError::WriteGitignore)?;

    Ok(true)
}
