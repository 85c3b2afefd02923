//! Resolution of a released selection against the word list.
//!
//! The run is read anchor → endpoint; the reversed text is never tried. A hit
//! consumes one pool color, marks the entry solved and tags each run cell with
//! a persistent solved layer. Completion is detected here as well.

use crate::error::{ErrorSeverity, PuzzleError};
use crate::geometry::SelectionRun;
use crate::state::{CellIndex, Color, PuzzleState, WordId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchError {
    #[error("color pool exhausted while solving {word}")]
    ColorPoolExhausted { word: WordId },

    #[error("run references cell {index} outside the grid")]
    CellOutOfBounds { index: CellIndex },

    #[error("{word} could not be marked solved")]
    SolveDesync { word: WordId },
}

impl PuzzleError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ColorPoolExhausted { .. } => ErrorSeverity::Fatal,
            Self::CellOutOfBounds { .. } | Self::SolveDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ColorPoolExhausted { .. } => "MATCH_COLOR_POOL_EXHAUSTED",
            Self::CellOutOfBounds { .. } => "MATCH_CELL_OUT_OF_BOUNDS",
            Self::SolveDesync { .. } => "MATCH_SOLVE_DESYNC",
        }
    }
}

/// A word that has just been found, with everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolvedWord {
    pub word: WordId,
    pub text: String,
    pub color: Color,
    /// `#RRGGBBAA` fill for the word's cells, using the session's solved alpha.
    pub background: String,
    pub cells: Vec<CellIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    Solved(SolvedWord),
    NoMatch { text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: MatchOutcome,
    /// True only for the resolution that solved the last word.
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WordMatcher;

impl WordMatcher {
    /// Matches `run` against the unsolved words and commits a hit.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn resolve(
        &self,
        state: &mut PuzzleState,
        run: &SelectionRun,
    ) -> Result<Resolution, MatchError> {
        if let Some(&index) = run
            .cells()
            .iter()
            .find(|&&index| state.grid.cell(index).is_none())
        {
            return Err(MatchError::CellOutOfBounds { index });
        }

        let text = state.grid.text_of(run.cells());
        let Some(word) = state.words.find_unsolved(&text) else {
            return Ok(Resolution {
                outcome: MatchOutcome::NoMatch { text },
                completed: false,
            });
        };

        debug_assert!(
            !state.words.pool().is_empty(),
            "color pool exhausted while solving {word}"
        );
        let color = state
            .words
            .next_color()
            .ok_or(MatchError::ColorPoolExhausted { word })?;
        if !state.words.mark_solved(word, color) {
            return Err(MatchError::SolveDesync { word });
        }
        state.words.pool_mut().pop();
        for &index in run.cells() {
            if let Some(cell) = state.grid.cell_mut(index) {
                cell.add_solved(word);
            }
        }

        let completed = state.words.is_all_solved() && state.status.finish();

        Ok(Resolution {
            outcome: MatchOutcome::Solved(SolvedWord {
                word,
                text,
                color,
                background: color.to_hex_with_alpha(state.solved_alpha),
                cells: run.cells().to_vec(),
            }),
            completed,
        })
    }
}
