//! Content loaders for reading puzzle data from files.
//!
//! Each loader exposes `load(path)` for files and a string form used by tests
//! and by hosts that embed their content.

pub mod config;
pub mod puzzle;
pub mod words;

pub use config::ConfigLoader;
pub use puzzle::{PuzzleDefinition, PuzzleLayout, PuzzleLoader};
pub use words::WordListLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
