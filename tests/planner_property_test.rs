//! Property-based tests for the batch planner.
//!
//! These tests use proptest to check that the batching limits and ordering
//! hold for arbitrary file lists and limits.

use proptest::prelude::*;

use copilot_review::PlannerConfig;
use copilot_review::config::PlannerOverrides;
use copilot_review::review::{ChangedFile, is_eligible, pack, plan};

// ============================================================================
// Strategies
// ============================================================================

/// Diff text with exactly `n` lines.
fn diff_of(n: usize) -> String {
    vec!["+x"; n].join("\n")
}

/// Per-file line counts, biased towards the interesting boundaries.
fn arbitrary_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(
        prop_oneof![
            1usize..=50,
            Just(1usize),
            Just(100usize),
            Just(150usize),
            Just(1000usize),
            Just(1001usize),
            1usize..=1500,
        ],
        0..40,
    )
}

fn arbitrary_config() -> impl Strategy<Value = PlannerConfig> {
    (1usize..=1200, 1usize..=8, 1usize..=2500).prop_map(
        |(max_file_size, max_files_per_batch, max_total_lines)| PlannerConfig {
            max_file_size,
            max_files_per_batch,
            max_total_lines,
        },
    )
}

/// Paths mixing reviewable sources with excluded artifacts.
fn arbitrary_path() -> impl Strategy<Value = String> {
    prop_oneof![
        "src/[a-z]{1,8}\\.rs",
        "lib/[a-z]{1,8}\\.(js|ts|py)",
        Just("yarn.lock".to_string()),
        Just("dist/bundle.js".to_string()),
        Just("assets/logo.PNG".to_string()),
        Just("vendor/node_modules/x.js".to_string()),
        Just("app.min.js".to_string()),
    ]
}

fn files_from(sizes: &[usize]) -> Vec<ChangedFile> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &n)| ChangedFile::new(format!("src/file{i}.rs"), diff_of(n)))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn batches_respect_both_limits(sizes in arbitrary_sizes(), config in arbitrary_config()) {
        let result = pack(files_from(&sizes), &config);

        for batch in &result.batches {
            prop_assert!(!batch.is_empty());
            prop_assert!(batch.len() <= config.max_files_per_batch);
            prop_assert!(batch.total_lines() <= config.max_total_lines);
            prop_assert_eq!(
                batch.total_lines(),
                batch.files().iter().map(|f| f.line_count).sum::<usize>()
            );
        }
    }

    #[test]
    fn resolved_limits_bound_every_batch(
        sizes in arbitrary_sizes(),
        max_file_size in 1usize..=1500,
        max_total_lines in 1usize..=1500,
    ) {
        let config = PlannerConfig::resolve(PlannerOverrides {
            max_file_size: Some(max_file_size),
            max_files_per_batch: Some(5),
            max_total_lines: Some(max_total_lines),
        });
        prop_assert!(config.max_file_size <= config.max_total_lines);

        let result = pack(files_from(&sizes), &config);
        for batch in &result.batches {
            prop_assert!(batch.total_lines() <= max_total_lines);
        }
    }

    #[test]
    fn concatenated_batches_preserve_order(sizes in arbitrary_sizes(), config in arbitrary_config()) {
        let files = files_from(&sizes);
        let expected: Vec<String> = files
            .iter()
            .filter(|f| f.line_count <= config.file_size_limit())
            .map(|f| f.path.clone())
            .collect();

        let result = pack(files, &config);
        let actual: Vec<String> = result.files().map(|f| f.path.clone()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn oversized_files_never_batched(sizes in arbitrary_sizes(), config in arbitrary_config()) {
        let result = pack(files_from(&sizes), &config);

        prop_assert!(result.files().all(|f| f.line_count <= config.file_size_limit()));
        prop_assert_eq!(
            result.oversized.len(),
            sizes.iter().filter(|&&n| n > config.file_size_limit()).count()
        );
    }

    #[test]
    fn a_closed_batch_could_not_take_the_next_file(sizes in arbitrary_sizes(), config in arbitrary_config()) {
        let result = pack(files_from(&sizes), &config);

        for pair in result.batches.windows(2) {
            let next = &pair[1].files()[0];
            let full = pair[0].len() >= config.max_files_per_batch
                || pair[0].total_lines() + next.line_count > config.max_total_lines;
            prop_assert!(full);
        }
    }

    #[test]
    fn plan_batches_exactly_the_eligible_paths(
        paths in prop::collection::vec(arbitrary_path(), 0..30),
        config in arbitrary_config(),
    ) {
        let result = plan(&paths, |_| "+x".to_string(), &config);

        let expected: Vec<&str> = paths
            .iter()
            .map(String::as_str)
            .filter(|p| is_eligible(p))
            .collect();
        let actual: Vec<&str> = result.files().map(|f| f.path.as_str()).collect();

        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn six_files_split_on_count() {
    let result = pack(files_from(&[100; 6]), &PlannerConfig::default());

    let lens: Vec<usize> = result.batches.iter().map(|b| b.len()).collect();
    assert_eq!(lens, vec![5, 1]);
}

#[test]
fn three_files_split_on_line_budget() {
    let config = PlannerConfig {
        max_total_lines: 150,
        ..PlannerConfig::default()
    };
    let result = pack(files_from(&[100, 100, 10]), &config);

    let sizes: Vec<Vec<usize>> = result
        .batches
        .iter()
        .map(|b| b.files().iter().map(|f| f.line_count).collect())
        .collect();
    assert_eq!(sizes, vec![vec![100], vec![100, 10]]);
}

#[test]
fn file_over_default_size_is_dropped() {
    let result = pack(files_from(&[1001]), &PlannerConfig::default());

    assert!(result.batches.is_empty());
    assert_eq!(result.oversized[0].line_count, 1001);
}
