//! How-to document listing the generated files.

use std::path::Path;

use crate::review::Batch;

/// Input data for the instructions document.
#[derive(Debug, Clone)]
pub struct InstructionsInput<'a> {
    pub batches: &'a [Batch],
    pub summary_path: &'a Path,
    pub pr_description_path: &'a Path,
    pub batch_paths: &'a [&'a Path],
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build the instructions document.
pub fn build_instructions(input: &InstructionsInput<'_>) -> String {
    let batch_files = input
        .batch_paths
        .iter()
        .map(|p| file_name(p))
        .collect::<Vec<_>>()
        .join(", ");

    let batch_details: String = input
        .batches
        .iter()
        .enumerate()
        .map(|(i, batch)| {
            let files = batch
                .files()
                .iter()
                .map(|f| f.path.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "\n### Batch {}:\n- Files: {}\n- Total lines: {}\n",
                i + 1,
                files,
                batch.total_lines()
            )
        })
        .collect();

    format!(
        r#"# Code Review Instructions

## Generated Files:
- Summary: {summary}
- PR Description: {pr_description}
- Batches: {batch_files}

## How to Use:

### 1. Generate PR Description (Optional but Recommended)
1. Open the PR description file in VS Code
2. Copy the prompt content and paste it into Copilot chat
3. Use the generated description for your Pull Request

### 2. Code Review Process
1. Open each batch file in VS Code
2. Use Copilot to review the code changes
3. Copy the prompt content and paste it into Copilot chat
4. Review the feedback and make necessary changes
5. Move to the next batch

## Tips:
- Start with the PR description to get a high-level overview
- Review batches in order for better context
- Focus on one batch at a time for detailed feedback
- Use the summary to understand the overall scope
- Consider the relationships between changes across batches

## Batch Details:
{batch_details}
"#,
        summary = file_name(input.summary_path),
        pr_description = file_name(input.pr_description_path),
    )
}
