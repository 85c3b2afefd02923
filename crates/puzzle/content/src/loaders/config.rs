//! Session configuration loader.

use std::path::Path;

use puzzle_core::PuzzleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for session configuration from TOML files.
///
/// Every field is optional; missing fields fall back to [`PuzzleConfig::default`].
///
/// ```toml
/// seed = 42
/// solved_alpha = 175
///
/// [palette.red]
/// min = 128
/// max = 255
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<PuzzleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PuzzleConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
