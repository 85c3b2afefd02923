//! Plain word-list loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Loader for `.list` files: one word per line, blank lines ignored.
pub struct WordListLoader;

impl WordListLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        let content = read_file(path)?;
        let words = Self::parse(&content);
        if words.is_empty() {
            anyhow::bail!("Word list {} contains no words", path.display());
        }
        Ok(words)
    }

    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_skips_blank_lines() {
        let words = WordListLoader::parse("  apple\n\nBANANA \r\n\t\ncherry");
        assert_eq!(words, vec!["apple", "BANANA", "cherry"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.list");
        std::fs::write(&path, "\n\n").unwrap();

        let error = WordListLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("contains no words"));
    }
}
