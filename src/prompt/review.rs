//! Per-batch code review prompt.

use crate::git::Commit;
use crate::review::Batch;

use super::format_commit_list;

/// Review guidance appended to every batch prompt.
const REVIEW_INSTRUCTIONS: &str = r#"## Review Instructions:
Please provide a comprehensive code review with the following structure:

### 1. **Overall Assessment**
- Brief summary of the changes
- General code quality assessment
- High-level concerns or positive aspects

### 2. **Detailed Review**
For each issue found, provide:
- **Location**: File name and line number(s)
- **Issue**: Clear description of the problem
- **Severity**: 🔴 **MUST FIX** or 🟡 **NITPICK**
- **Current Code**: Show the problematic code
- **Suggested Fix**: Provide improved code example
- **Why This Improves**: Explain the benefits of the suggested change

### 3. **Review Categories**

#### **🔴 Code Quality (MUST FIX)**
- Critical bugs or logic errors
- Security vulnerabilities
- Performance issues that could cause problems
- Code that will break in production

#### **🟡 Code Quality (NITPICK)**
- Code style and formatting
- Minor optimizations
- Code readability improvements
- Best practice suggestions

#### **🔴 Security (MUST FIX)**
- Input validation issues
- Authentication/authorization problems
- Data exposure risks
- SQL injection or XSS vulnerabilities

#### **🟡 Security (NITPICK)**
- Security best practices
- Minor security improvements
- Logging sensitive data

#### **🔴 Performance (MUST FIX)**
- Memory leaks
- Infinite loops
- Blocking operations
- Database N+1 queries

#### **🟡 Performance (NITPICK)**
- Minor optimizations
- Unnecessary computations
- Code efficiency improvements

#### **🔴 Architecture (MUST FIX)**
- Violation of separation of concerns
- Tight coupling issues
- Missing error handling
- Inconsistent patterns

#### **🟡 Architecture (NITPICK)**
- Design pattern suggestions
- Code organization improvements
- Refactoring opportunities

#### **🔴 Testing (MUST FIX)**
- Missing critical tests
- Tests that don't cover edge cases
- Broken or flaky tests

#### **🟡 Testing (NITPICK)**
- Additional test coverage
- Test quality improvements
- Test organization

### 4. **Action Items Summary**
At the end, provide a clear summary with:

#### **🔴 MUST FIX (Critical Issues)**
List all critical issues that must be addressed before merge:
- [ ] **Issue 1**: Brief description with file:line reference
- [ ] **Issue 2**: Brief description with file:line reference

#### **🟡 NITPICK (Optional Improvements)**
List all optional improvements:
- [ ] **Improvement 1**: Brief description with file:line reference
- [ ] **Improvement 2**: Brief description with file:line reference

### 5. **Code Examples Format**
For each issue, use this format:

```markdown
**🔴 MUST FIX - [Category]**
**File**: `filename.js:line-number`
**Issue**: Brief description of the problem

**Current Code:**
```javascript
// Show the problematic code here
const badCode = "example";
```

**Suggested Fix:**
```javascript
// Show the improved code here
const goodCode = "example";
```

**Why This Improves:**
- Explain the specific benefits
- Mention potential issues avoided
- Reference best practices or standards
```

### 6. **Positive Feedback**
Also highlight:
- Good practices implemented
- Well-written code sections
- Creative solutions
- Proper error handling
- Good test coverage

Please provide specific, actionable feedback with clear categorization and code examples for all suggestions."#;

/// Build the review prompt for one batch.
///
/// `batch_number` is 1-based.
pub fn build_review_prompt(
    batch: &Batch,
    commits: &[Commit],
    batch_number: usize,
    total_batches: usize,
) -> String {
    let files_section = batch
        .files()
        .iter()
        .map(|f| format!("- {} ({} lines changed)", f.path, f.line_count))
        .collect::<Vec<_>>()
        .join("\n");

    let changes_section = batch
        .files()
        .iter()
        .map(|f| format!("\n### File: {}\n```diff\n{}\n```\n", f.path, f.diff_text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# Code Review Request - Batch {batch_number}/{total_batches}

## Context
Please review the following code changes. This is batch {batch_number} of {total_batches} for the code review.

## Commits in this review:
{commit_list}

## Files Changed:
{files_section}

## Code Changes:

{changes_section}

{REVIEW_INSTRUCTIONS}"#,
        commit_list = format_commit_list(commits),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::prompt::test_commits;
    use crate::review::{ChangedFile, pack};

    fn batch() -> Batch {
        let files = vec![
            ChangedFile::new("src/lib.rs", "@@ -1 +1 @@\n-old\n+new"),
            ChangedFile::new("src/main.rs", "+fn main() {}"),
        ];
        pack(files, &PlannerConfig::default()).batches.remove(0)
    }

    #[test]
    fn test_review_prompt_header() {
        let prompt = build_review_prompt(&batch(), &test_commits(), 2, 3);
        assert!(prompt.starts_with("# Code Review Request - Batch 2/3"));
        assert!(prompt.contains("This is batch 2 of 3 for the code review."));
    }

    #[test]
    fn test_review_prompt_lists_files_with_line_counts() {
        let prompt = build_review_prompt(&batch(), &test_commits(), 1, 1);
        assert!(prompt.contains("- src/lib.rs (3 lines changed)"));
        assert!(prompt.contains("- src/main.rs (1 lines changed)"));
    }

    #[test]
    fn test_review_prompt_embeds_diffs() {
        let prompt = build_review_prompt(&batch(), &test_commits(), 1, 1);
        assert!(prompt.contains("### File: src/lib.rs\n```diff\n@@ -1 +1 @@\n-old\n+new\n```"));
        assert!(prompt.contains("+fn main() {}"));
    }

    #[test]
    fn test_review_prompt_includes_instructions_and_commits() {
        let prompt = build_review_prompt(&batch(), &test_commits(), 1, 1);
        assert!(prompt.contains("- a1b2c3d: feat: add batch planner"));
        assert!(prompt.contains("### 4. **Action Items Summary**"));
        assert!(prompt.ends_with("code examples for all suggestions."));
    }
}
