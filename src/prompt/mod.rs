//! Markdown prompt documents written for each review run.

pub mod instructions;
pub mod pr_description;
pub mod review;
pub mod summary;

pub use instructions::{InstructionsInput, build_instructions};
pub use pr_description::{PrDescriptionInput, build_pr_description_prompt};
pub use review::build_review_prompt;
pub use summary::build_summary_prompt;

use crate::git::Commit;

/// Render commits as a markdown list of `- <hash>: <message>` lines.
pub(crate) fn format_commit_list(commits: &[Commit]) -> String {
    commits
        .iter()
        .map(|c| format!("- {}: {}", c.hash, c.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn test_commits() -> Vec<Commit> {
    vec![
        Commit {
            hash: "a1b2c3d".to_string(),
            message: "feat: add batch planner".to_string(),
        },
        Commit {
            hash: "e4f5a6b".to_string(),
            message: "fix: handle empty diff".to_string(),
        },
    ]
}
