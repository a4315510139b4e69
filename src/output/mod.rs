//! Prompt files on disk and the housekeeping around them.

pub mod housekeeping;
pub mod writer;

pub use housekeeping::{cleanup_old_files, ensure_gitignore_entry, gitignore_entry};
pub use writer::{DEFAULT_OUTPUT_DIR, file_timestamp, save_prompt};
