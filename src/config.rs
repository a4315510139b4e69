//! Planner limits and where they come from.
//!
//! Each limit is taken from the command line if given, else from its
//! environment variable, else from the built-in default.

use std::env;

use tracing::warn;

/// Default per-file diff line ceiling.
pub const DEFAULT_MAX_FILE_SIZE: usize = 1000;

/// Default number of files per batch.
pub const DEFAULT_MAX_FILES_PER_BATCH: usize = 5;

/// Default cumulative diff lines per batch.
pub const DEFAULT_MAX_TOTAL_LINES: usize = 2000;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV_VAR: &str = "COPILOT_REVIEW_MAX_FILE_SIZE";

/// Environment variable overriding [`DEFAULT_MAX_FILES_PER_BATCH`].
pub const MAX_FILES_PER_BATCH_ENV_VAR: &str = "COPILOT_REVIEW_MAX_FILES_PER_BATCH";

/// Environment variable overriding [`DEFAULT_MAX_TOTAL_LINES`].
pub const MAX_TOTAL_LINES_ENV_VAR: &str = "COPILOT_REVIEW_MAX_TOTAL_LINES";

/// Limits applied by the batch planner for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Files whose diff has more lines than this are skipped.
    pub max_file_size: usize,
    pub max_files_per_batch: usize,
    pub max_total_lines: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files_per_batch: DEFAULT_MAX_FILES_PER_BATCH,
            max_total_lines: DEFAULT_MAX_TOTAL_LINES,
        }
    }
}

/// Limits given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerOverrides {
    pub max_file_size: Option<usize>,
    pub max_files_per_batch: Option<usize>,
    pub max_total_lines: Option<usize>,
}

impl PlannerConfig {
    /// Build the config from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::resolve(PlannerOverrides::default())
    }

    /// Build the config, preferring explicit overrides over the environment.
    ///
    /// `max_file_size` is lowered to `max_total_lines` when it is larger, so
    /// every accepted file fits in an empty batch.
    pub fn resolve(overrides: PlannerOverrides) -> Self {
        let config = Self {
            max_file_size: overrides
                .max_file_size
                .unwrap_or_else(|| limit_from_env(MAX_FILE_SIZE_ENV_VAR, DEFAULT_MAX_FILE_SIZE)),
            max_files_per_batch: overrides.max_files_per_batch.unwrap_or_else(|| {
                limit_from_env(MAX_FILES_PER_BATCH_ENV_VAR, DEFAULT_MAX_FILES_PER_BATCH)
            }),
            max_total_lines: overrides
                .max_total_lines
                .unwrap_or_else(|| limit_from_env(MAX_TOTAL_LINES_ENV_VAR, DEFAULT_MAX_TOTAL_LINES)),
        };

        if config.max_file_size > config.max_total_lines {
            warn!(
                "max file size {} exceeds max total lines {}, using {}",
                config.max_file_size, config.max_total_lines, config.max_total_lines
            );
        }

        Self {
            max_file_size: config.file_size_limit(),
            ..config
        }
    }

    /// Largest diff, in lines, that a file may have and still be batched.
    ///
    /// Never more than `max_total_lines`.
    pub fn file_size_limit(&self) -> usize {
        self.max_file_size.min(self.max_total_lines)
    }
}

/// Read a positive limit from `var`, falling back to `default`.
///
/// Logs a warning if the variable is set but is not a positive integer.
fn limit_from_env(var: &str, default: usize) -> usize {
    match env::var(var) {
        Ok(v) if !v.is_empty() => match v.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!("Invalid {} value '{}', using default {}", var, v, default);
                default
            }
        },
        _ => default,
    }
}

/// Parse a positive limit given on the command line.
pub fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
