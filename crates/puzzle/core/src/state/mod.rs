//! Authoritative puzzle state.
//!
//! This module owns the grid, the word list with its color pool, the in-flight
//! selection and the game status. Hosts read it freely but mutate cells and
//! words only through [`SelectionState`] transitions and the
//! [`WordMatcher`](crate::matcher::WordMatcher).
pub mod grid;
pub mod words;

pub use grid::{Cell, CellFlags, CellIndex, CellVisual, Grid, GridDimensions, GridError, Position};
pub use words::{Color, ColorPool, WordEntry, WordId, WordList, WordListError};

use crate::config::PuzzleConfig;
use crate::palette::ColorPalette;
use crate::selection::SelectionState;

/// Session status. The only transition is `InProgress` → `Finished`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Finished,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Returns true only on the call that performs the transition.
    pub(crate) fn finish(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        *self = Self::Finished;
        true
    }
}

/// Canonical snapshot of one word-search session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleState {
    pub grid: Grid,
    pub words: WordList,
    pub selection: SelectionState,
    pub status: GameStatus,
    /// Alpha of solved-cell backgrounds, copied from [`PuzzleConfig`].
    #[cfg_attr(feature = "serde", serde(default = "default_solved_alpha"))]
    pub solved_alpha: u8,
}

#[cfg(feature = "serde")]
fn default_solved_alpha() -> u8 {
    PuzzleConfig::DEFAULT_SOLVED_ALPHA
}

impl PuzzleState {
    /// Creates a fresh session from an already validated grid and word list.
    pub fn new(grid: Grid, words: WordList) -> Self {
        Self {
            grid,
            words,
            selection: SelectionState::Idle,
            status: GameStatus::InProgress,
            solved_alpha: PuzzleConfig::DEFAULT_SOLVED_ALPHA,
        }
    }

    /// Creates a fresh session, generating one palette color per word.
    pub fn with_words<I, S>(grid: Grid, words: I, config: &PuzzleConfig) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let colors = ColorPalette::new(config.palette).generate(words.len(), config.seed);
        let words = WordList::new(words, colors)?;
        Ok(Self {
            solved_alpha: config.solved_alpha,
            ..Self::new(grid, words)
        })
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn remaining(&self) -> usize {
        self.words.remaining()
    }

    /// `#RRGGBBAA` background of a solved word.
    pub fn solved_background(&self, word: WordId) -> Option<String> {
        let color = self.words.entry(word)?.color()?;
        Some(color.to_hex_with_alpha(self.solved_alpha))
    }

    /// Solved-word layers covering `cell`, oldest first, with each word's color.
    pub fn solved_layers(&self, cell: CellIndex) -> Vec<(WordId, Color)> {
        let Some(cell) = self.grid.cell(cell) else {
            return Vec::new();
        };
        cell.solved_by()
            .iter()
            .filter_map(|&word| {
                let color = self.words.entry(word)?.color()?;
                Some((word, color))
            })
            .collect()
    }
}
