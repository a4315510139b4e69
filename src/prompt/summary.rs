//! Overview prompt covering the whole review.

use crate::git::Commit;

use super::format_commit_list;

/// Build the summary document for a review of `commits` split into
/// `total_batches` batches.
pub fn build_summary_prompt(commits: &[Commit], total_batches: usize) -> String {
    format!(
        r#"# Code Review Summary

## Overview
This code review covers {commit_count} commits across {total_batches} batches.

## Commits Summary:
{commit_list}

## Review Process:
- Total batches: {total_batches}
- Each batch contains related changes for focused review
- Please review each batch individually for detailed feedback
- Use this summary to understand the overall scope of changes

## Next Steps:
1. Review each batch individually
2. Provide specific feedback for each batch
3. Consider the overall impact of all changes together
4. Suggest any additional testing or documentation needs"#,
        commit_count = commits.len(),
        commit_list = format_commit_list(commits),
    )
}
