//! copilot-review - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use copilot_review::config::{PlannerConfig, PlannerOverrides, parse_limit};
use copilot_review::output::DEFAULT_OUTPUT_DIR;
use copilot_review::run::DEFAULT_BASE_BRANCH;
use copilot_review::{GitRepository, RunOptions, RunOutcome, run};

/// Generate code review and PR description prompts for VS Code Copilot.
#[derive(Parser, Debug)]
#[command(name = "copilot-review")]
#[command(about = "Generate code review and PR description prompts for VS Code Copilot")]
#[command(version)]
#[command(after_help = "Examples:
  copilot-review                     Compare with develop branch
  copilot-review main                Compare with main branch
  copilot-review main --keep-old     Compare with main, keep old files
  copilot-review main --no-gitignore Compare with main, skip .gitignore update")]
struct Cli {
    /// The base branch to compare against
    #[arg(default_value = DEFAULT_BASE_BRANCH)]
    base_branch: String,

    /// Keep old prompt files instead of cleaning them up
    #[arg(short = 'k', long)]
    keep_old: bool,

    /// Skip adding the output directory to .gitignore
    #[arg(long)]
    no_gitignore: bool,

    /// Directory that receives the generated prompts
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip files whose diff is longer than this many lines
    #[arg(long, value_parser = parse_limit)]
    max_file_size: Option<usize>,

    /// Maximum number of files per review batch
    #[arg(long, value_parser = parse_limit)]
    max_files_per_batch: Option<usize>,

    /// Maximum total diff lines per review batch
    #[arg(long, value_parser = parse_limit)]
    max_total_lines: Option<usize>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    println!("Starting Copilot Code Review Generator...\n");

    let repo = GitRepository::discover(".")
        .context("Not a git repository. Run copilot-review from within a git repository.")?;

    let options = RunOptions {
        base_branch: cli.base_branch,
        skip_cleanup: cli.keep_old,
        skip_gitignore: cli.no_gitignore,
        output_dir: cli.output_dir,
        gitignore_path: PathBuf::from(".gitignore"),
        planner: PlannerConfig::resolve(PlannerOverrides {
            max_file_size: cli.max_file_size,
            max_files_per_batch: cli.max_files_per_batch,
            max_total_lines: cli.max_total_lines,
        }),
    };

    let outcome = run(&repo, &options).context("Failed to generate review prompts")?;

    if let RunOutcome::Generated(prompts) = outcome {
        println!("✓ Code review prompts generated successfully!");
        println!("All files saved in: {}/", options.output_dir.display());
        println!("\nNext steps:");
        println!("1. Open the instructions file: {}", prompts.instructions.display());
        println!("2. Follow the instructions to review each batch");
        println!("3. Use VS Code Copilot to get detailed feedback");
    }

    Ok(())
}
