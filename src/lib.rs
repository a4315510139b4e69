//! copilot-review - A CLI tool that turns a branch diff into code review prompts.
//!
//! # Overview
//!
//! copilot-review compares the current branch with a base branch, packs the
//! changed files into size-bounded batches, and writes markdown prompts (a
//! summary, a PR description request, one review request per batch, and
//! usage instructions) ready to paste into an AI coding assistant.

pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod prompt;
pub mod review;
pub mod run;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use error::{GitError, OutputError, ReviewError};
pub use git::{Commit, GitRepository, VcsProvider};
pub use review::{Batch, BatchPlan, ChangedFile, FileCategory};
pub use run::{RunOptions, RunOutcome, run};
