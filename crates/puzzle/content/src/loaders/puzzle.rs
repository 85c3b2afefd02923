//! Puzzle definition loader.
//!
//! A definition is the letter layout plus the target words. The layout is
//! either given row by row or described by word placements and a filler.

use std::path::Path;

use puzzle_core::{Grid, GridDimensions, PuzzleConfig, PuzzleState};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::placement::{WordPlacement, letters_from_placements};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleLayout {
    /// Equal-length rows, top to bottom.
    Rows(Vec<String>),
    Placements {
        width: u32,
        height: u32,
        filler: char,
        placements: Vec<WordPlacement>,
    },
}

/// Puzzle definition as stored in RON files.
///
/// ```ron
/// (
///     layout: Rows(["HXXXX", "XEXXX", "XXLXX", "XXXLX", "XXXXO"]),
///     words: ["HELLO"],
/// )
/// ```
///
/// With a `Placements` layout, `words` may be omitted and defaults to the
/// placed words in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub layout: PuzzleLayout,
    #[serde(default)]
    pub words: Vec<String>,
}

impl PuzzleDefinition {
    /// Target words, falling back to the placed words.
    pub fn target_words(&self) -> Vec<String> {
        match &self.layout {
            PuzzleLayout::Placements { placements, .. } if self.words.is_empty() => placements
                .iter()
                .map(|placement| placement.word.clone())
                .collect(),
            _ => self.words.clone(),
        }
    }

    pub fn grid(&self) -> LoadResult<Grid> {
        let grid = match &self.layout {
            PuzzleLayout::Rows(rows) => Grid::from_rows(rows.as_slice()),
            PuzzleLayout::Placements {
                width,
                height,
                filler,
                placements,
            } => {
                let dimensions = GridDimensions::new(*width, *height);
                let letters = letters_from_placements(dimensions, placements, *filler)
                    .map_err(|e| anyhow::anyhow!("Invalid word placement: {}", e))?;
                Grid::new(dimensions, letters)
            }
        };
        grid.map_err(|e| anyhow::anyhow!("Invalid puzzle grid: {}", e))
    }

    /// Validates the definition and produces a fresh session state.
    pub fn build(&self, config: &PuzzleConfig) -> LoadResult<PuzzleState> {
        let grid = self.grid()?;
        PuzzleState::with_words(grid, self.target_words(), config)
            .map_err(|e| anyhow::anyhow!("Invalid word list: {}", e))
    }
}

/// Loader for puzzle definitions from RON files.
pub struct PuzzleLoader;

impl PuzzleLoader {
    pub fn load(path: &Path) -> LoadResult<PuzzleDefinition> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load puzzle {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<PuzzleDefinition> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse puzzle RON: {}", e))
    }
}
