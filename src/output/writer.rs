//! Write prompt files into the output directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tempfile::NamedTempFile;

use crate::error::OutputError;

/// Directory, relative to the working directory, that receives prompt files.
pub const DEFAULT_OUTPUT_DIR: &str = "code-review-prompts";

/// Timestamp used in generated file names.
///
/// An ISO-8601 UTC instant with millisecond precision, with `:` and `.`
/// replaced by `-` so it is safe in file names on every platform.
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Write `content` to `dir/filename`, creating `dir` if needed.
///
/// The file is written to a temporary file in the same directory and then
/// moved into place, so a reader never sees a half-written prompt.
pub fn save_prompt(dir: &Path, content: &str, filename: &str) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    let write_err = |source| OutputError::WriteFailed {
        path: path.clone(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(&path).map_err(|e| OutputError::PersistFailed {
        path: path.clone(),
        source: e.error,
    })?;

    Ok(path)
}
