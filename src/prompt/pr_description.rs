//! Prompt asking the assistant to write a pull request description.

use crate::git::Commit;
use crate::review::count_file_types;

use super::format_commit_list;

/// Input data for the PR description prompt.
#[derive(Debug, Clone)]
pub struct PrDescriptionInput<'a> {
    pub commits: &'a [Commit],
    /// Every changed path, including files excluded from review.
    pub changed_files: &'a [String],
    pub base_branch: &'a str,
    pub current_branch: &'a str,
}

/// Build the PR description prompt.
pub fn build_pr_description_prompt(input: &PrDescriptionInput<'_>) -> String {
    let file_types = count_file_types(input.changed_files)
        .iter()
        .map(|t| format!("- {}: {} files", t.category, t.count))
        .collect::<Vec<_>>()
        .join("\n");

    let changed_files = input
        .changed_files
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# Pull Request Description Generator

## Context
Please generate a comprehensive Pull Request description for the following changes.

## Branch Information:
- **Source Branch**: {current_branch}
- **Target Branch**: {base_branch}
- **Total Commits**: {commit_count}
- **Total Files Changed**: {file_count}

## Commits:
{commit_list}

## File Changes Summary:
{file_types}

## Changed Files:
{changed_files}

## Instructions:
Please generate a professional Pull Request description that includes ALL of the following sections:

### 1. **Title**:
A clear, concise title (max 50 characters)

### 2. **Summary of Changes**:
- **What**: What was changed and why?
- **Why**: Why these changes were necessary
- **Business Value**: What business problem does this solve?

### 3. **Context/Background**:
- **Rally Ticket**: Link to Rally ticket or issue number
- **Business Details**: Relevant business context and requirements
- **Related Issues**: Any related tickets or dependencies

### 4. **Implementation Details**:
- **Walkthrough**: Step-by-step explanation of what was implemented
- **Architecture**: Key architectural decisions made
- **Technical Approach**: How the solution was built
- **Code Structure**: Overview of new/modified components

### 5. **How to Test?**:
- **Manual Testing**: Step-by-step testing instructions
- **Automated Tests**: What tests were added/updated
- **Test Data**: Any special test data or setup required
- **Edge Cases**: Specific scenarios to test

### 6. **Impact Areas**:
- **Performance**: Any performance implications
- **Security**: Security considerations
- **User Experience**: How this affects end users
- **System Integration**: Impact on other systems
- **Data**: Any data migration or schema changes

### 7. **Optional Review Notes**:
- **Code Quality**: Areas that need special attention
- **Design Decisions**: Rationale for specific choices
- **Trade-offs**: Any compromises made and why
- **Future Considerations**: What might need to be addressed later

### 8. **Focus Area for Review**:
- **Critical Sections**: Most important code to review
- **Complex Logic**: Areas with complex business logic
- **New Dependencies**: New libraries or frameworks used
- **Configuration Changes**: Any config or environment changes

### 9. **Backward Compatibility** (Optional):
- **Breaking Changes**: Any breaking changes and migration path
- **API Changes**: Changes to public APIs
- **Database Changes**: Schema or data structure changes
- **Configuration**: Changes to configuration requirements

### 10. **Screenshots** (if applicable):
- **UI Changes**: Screenshots of visual changes
- **Before/After**: Comparison images if relevant
- **Error States**: Screenshots of error handling
- **Mobile/Responsive**: Mobile view screenshots if applicable

### 11. **Additional Sections** (as needed):
- **Dependencies**: New dependencies or version updates
- **Deployment Notes**: Special deployment considerations
- **Monitoring**: Any new monitoring or logging added
- **Documentation**: Documentation that was updated

## Formatting Requirements:
- Use proper markdown formatting
- Include emojis for visual appeal (🎯, 📝, 🔧, 🧪, etc.)
- Use bullet points and numbered lists for clarity
- Include code blocks for technical details
- Use tables for structured information
- Add horizontal rules (---) to separate major sections

Please generate a comprehensive, professional PR description that covers all these areas based on the code changes provided."#,
        current_branch = input.current_branch,
        base_branch = input.base_branch,
        commit_count = input.commits.len(),
        file_count = input.changed_files.len(),
        commit_list = format_commit_list(input.commits),
    )
}
