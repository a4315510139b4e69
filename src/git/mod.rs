//! Git operations using git2-rs.

pub mod commits;
pub mod diff;
pub mod provider;
pub mod range;

pub use commits::{Commit, fetch_commits};
pub use diff::{changed_paths, file_content, file_diff};
pub use provider::{GitRepository, VcsProvider};
pub use range::{BranchRange, current_branch, resolve_range};
