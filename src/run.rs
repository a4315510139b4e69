//! A single review run: query git, plan batches, write prompt files.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::ReviewError;
use crate::git::VcsProvider;
use crate::output::{
    DEFAULT_OUTPUT_DIR, cleanup_old_files, ensure_gitignore_entry, file_timestamp,
    gitignore_entry, save_prompt,
};
use crate::prompt::{
    InstructionsInput, PrDescriptionInput, build_instructions, build_pr_description_prompt,
    build_review_prompt, build_summary_prompt,
};
use crate::review::plan;

/// Default branch to compare against.
pub const DEFAULT_BASE_BRANCH: &str = "develop";

/// Settings for one run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base_branch: String,
    /// Keep prompt files from earlier runs.
    pub skip_cleanup: bool,
    /// Leave `.gitignore` untouched.
    pub skip_gitignore: bool,
    pub output_dir: PathBuf,
    pub gitignore_path: PathBuf,
    pub planner: PlannerConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            skip_cleanup: false,
            skip_gitignore: false,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            gitignore_path: PathBuf::from(".gitignore"),
            planner: PlannerConfig::default(),
        }
    }
}

/// Paths of the files written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompts {
    pub summary: PathBuf,
    pub pr_description: PathBuf,
    pub batches: Vec<PathBuf>,
    pub instructions: PathBuf,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The branch has no commits that the base lacks.
    NoCommits,
    /// Every changed file was excluded or too large.
    NoReviewableFiles,
    Generated(GeneratedPrompts),
}

/// Run the review generator against `vcs`.
pub fn run<V: VcsProvider>(vcs: &V, options: &RunOptions) -> Result<RunOutcome, ReviewError> {
    run_at(vcs, options, Utc::now())
}

/// Run the review generator, stamping files with `now`.
pub fn run_at<V: VcsProvider>(
    vcs: &V,
    options: &RunOptions,
    now: DateTime<Utc>,
) -> Result<RunOutcome, ReviewError> {
    let base_branch = options.base_branch.as_str();
    let current_branch = vcs.current_branch()?;

    if !options.skip_gitignore {
        update_gitignore(&options.gitignore_path, &options.output_dir);
    }

    if !options.skip_cleanup {
        remove_stale_prompts(&options.output_dir);
    }

    println!("Comparing branches: {} -> {}\n", current_branch, base_branch);

    let commits = vcs.commits_between(base_branch, &current_branch)?;
    let changed_files = vcs.changed_files(base_branch, &current_branch)?;

    if commits.is_empty() {
        println!("No commits found between {} and {}", base_branch, current_branch);
        println!("No commits to review. Branches are in sync.");
        return Ok(RunOutcome::NoCommits);
    }

    println!("Found {} commits to review", commits.len());
    println!("Found {} changed files\n", changed_files.len());

    let batch_plan = plan(
        &changed_files,
        |path| vcs.file_diff(base_branch, &current_branch, path),
        &options.planner,
    );

    for skipped in &batch_plan.oversized {
        warn!(
            "Skipping large file: {} ({} lines)",
            skipped.path, skipped.line_count
        );
    }

    if batch_plan.batches.is_empty() {
        println!("No reviewable files found (all files excluded or too large)");
        return Ok(RunOutcome::NoReviewableFiles);
    }

    let total_batches = batch_plan.batches.len();
    println!("Created {} batches for review\n", total_batches);

    let timestamp = file_timestamp(now);
    let dir = options.output_dir.as_path();

    let summary = save_prompt(
        dir,
        &build_summary_prompt(&commits, total_batches),
        &format!("summary-{timestamp}.md"),
    )?;
    println!("Summary saved: {}", summary.display());

    let pr_description = save_prompt(
        dir,
        &build_pr_description_prompt(&PrDescriptionInput {
            commits: &commits,
            changed_files: &changed_files,
            base_branch,
            current_branch: &current_branch,
        }),
        &format!("pr-description-{timestamp}.md"),
    )?;
    println!("PR description prompt saved: {}", pr_description.display());

    let mut batches = Vec::with_capacity(total_batches);
    for (i, batch) in batch_plan.batches.iter().enumerate() {
        let number = i + 1;
        let path = save_prompt(
            dir,
            &build_review_prompt(batch, &commits, number, total_batches),
            &format!("batch-{number}-{timestamp}.md"),
        )?;
        println!("Batch {} saved: {}", number, path.display());
        batches.push(path);
    }

    let batch_paths: Vec<&Path> = batches.iter().map(PathBuf::as_path).collect();
    let instructions = save_prompt(
        dir,
        &build_instructions(&InstructionsInput {
            batches: &batch_plan.batches,
            summary_path: &summary,
            pr_description_path: &pr_description,
            batch_paths: &batch_paths,
        }),
        &format!("instructions-{timestamp}.md"),
    )?;
    println!("Instructions saved: {}\n", instructions.display());

    Ok(RunOutcome::Generated(GeneratedPrompts {
        summary,
        pr_description,
        batches,
        instructions,
    }))
}

/// Add the output directory to `.gitignore`, warning on failure.
///
/// Skipped when the output directory is not below the directory holding the
/// ignore file.
fn update_gitignore(gitignore_path: &Path, output_dir: &Path) {
    let Some(relative) = ignore_relative_path(gitignore_path, output_dir) else {
        debug!(
            "Output directory {} is outside {}, not updating .gitignore",
            output_dir.display(),
            gitignore_path.display()
        );
        return;
    };
    let entry = gitignore_entry(relative);
    match ensure_gitignore_entry(gitignore_path, &entry) {
        Ok(true) => println!("Added '{}' to {}", entry, gitignore_path.display()),
        Ok(false) => {}
        Err(e) => warn!("Could not update .gitignore: {}", e),
    }
}

/// `output_dir` relative to the directory holding the ignore file.
fn ignore_relative_path<'a>(gitignore_path: &Path, output_dir: &'a Path) -> Option<&'a Path> {
    let relative = if output_dir.is_relative() {
        output_dir
    } else {
        output_dir.strip_prefix(gitignore_path.parent()?).ok()?
    };

    let escapes = relative
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    (relative.is_relative() && !escapes).then_some(relative)
}

/// Remove prompt files from earlier runs, warning on failure.
fn remove_stale_prompts(output_dir: &Path) {
    match cleanup_old_files(output_dir) {
        Ok(0) => {}
        Ok(n) => println!("Cleaned up {} old prompt files\n", n),
        Err(e) => warn!("Could not clean up old files: {}", e),
    }
}
