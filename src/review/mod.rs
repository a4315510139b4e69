//! Selecting, batching and classifying changed files for review.

pub mod batch;
pub mod classify;
pub mod eligibility;

pub use batch::{Batch, BatchPlan, ChangedFile, OversizedFile, count_lines, pack, plan};
pub use classify::{FileCategory, FileTypeCount, classify, count_file_types};
pub use eligibility::is_eligible;
