//! Greedy packing of changed files into review batches.
//!
//! Files are taken in discovery order. Each one either joins the open batch
//! or, when the open batch is full by file count or would overflow its line
//! budget, closes it and starts the next one. Closed batches are never
//! revisited, so every batch satisfies both limits when it is closed.

use crate::config::PlannerConfig;

use super::eligibility::is_eligible;

/// Number of lines in a diff, counted as the segments produced by splitting
/// on `\n`. An empty diff counts as one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// A changed file with its diff, ready to be placed in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub diff_text: String,
    pub line_count: usize,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, diff_text: impl Into<String>) -> Self {
        let diff_text = diff_text.into();
        let line_count = count_lines(&diff_text);
        Self {
            path: path.into(),
            diff_text,
            line_count,
        }
    }
}

/// Files reviewed together in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    files: Vec<ChangedFile>,
    total_lines: usize,
}

impl Batch {
    pub fn files(&self) -> &[ChangedFile] {
        &self.files
    }

    /// Sum of the line counts of all files in the batch.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether `line_count` more lines would push the batch over either limit.
    fn is_full_for(&self, line_count: usize, config: &PlannerConfig) -> bool {
        self.files.len() >= config.max_files_per_batch
            || self.total_lines + line_count > config.max_total_lines
    }

    fn push(&mut self, file: ChangedFile) {
        self.total_lines += file.line_count;
        self.files.push(file);
    }
}

/// A file left out of every batch because its diff was too large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OversizedFile {
    pub path: String,
    pub line_count: usize,
}

/// Result of planning: the batches in order, plus the files that were too
/// large to review so the caller can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    pub batches: Vec<Batch>,
    pub oversized: Vec<OversizedFile>,
}

impl BatchPlan {
    /// All batched files in order.
    pub fn files(&self) -> impl Iterator<Item = &ChangedFile> {
        self.batches.iter().flat_map(|b| b.files.iter())
    }
}

/// Accumulator threaded through the planning fold.
#[derive(Default)]
struct PlanState {
    closed: Vec<Batch>,
    open: Batch,
    oversized: Vec<OversizedFile>,
}

impl PlanState {
    fn accept(mut self, file: ChangedFile, config: &PlannerConfig) -> Self {
        if file.line_count > config.file_size_limit() {
            self.oversized.push(OversizedFile {
                path: file.path,
                line_count: file.line_count,
            });
            return self;
        }

        if !self.open.is_empty() && self.open.is_full_for(file.line_count, config) {
            self.closed.push(std::mem::take(&mut self.open));
        }

        self.open.push(file);
        self
    }

    fn finish(mut self) -> BatchPlan {
        if !self.open.is_empty() {
            self.closed.push(self.open);
        }

        BatchPlan {
            batches: self.closed,
            oversized: self.oversized,
        }
    }
}

/// Pack already-diffed files into batches.
///
/// Oversized files are rejected; everything else is placed in input order.
pub fn pack<I>(files: I, config: &PlannerConfig) -> BatchPlan
where
    I: IntoIterator<Item = ChangedFile>,
{
    files
        .into_iter()
        .fold(PlanState::default(), |state, file| state.accept(file, config))
        .finish()
}

/// Plan review batches for a list of changed paths.
///
/// Ineligible paths are dropped before their diff is requested. `diff_for`
/// returns the diff text for a path; it is expected to return an empty
/// string rather than fail.
pub fn plan<I, S, F>(paths: I, mut diff_for: F, config: &PlannerConfig) -> BatchPlan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> String,
{
    let files = paths
        .into_iter()
        .filter(|path| is_eligible(path.as_ref()))
        .map(|path| {
            let path = path.as_ref();
            ChangedFile::new(path, diff_for(path))
        });

    pack(files, config)
}
