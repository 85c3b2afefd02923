//! Event types recorded for presentation layers.

use puzzle_core::{CellIndex, Color, WordId};
use serde::{Deserialize, Serialize};

/// Topics for event filtering
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Transient highlight changes during a drag
    Selection,
    /// Solved words and completion
    Progress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A cell joined the current selection, tinted with the pending color.
    Highlighted { cell: CellIndex, tint: Option<Color> },

    /// A cell left the current selection or was swept after a release.
    Cleared { cell: CellIndex },

    WordSolved {
        word: WordId,
        color: Color,
        /// `#RRGGBBAA` fill for the solved cells.
        background: String,
        cells: Vec<CellIndex>,
    },

    /// Emitted exactly once per session.
    GameFinished,
}

impl PuzzleEvent {
    pub fn topic(&self) -> Topic {
        match self {
            PuzzleEvent::Highlighted { .. } | PuzzleEvent::Cleared { .. } => Topic::Selection,
            PuzzleEvent::WordSolved { .. } | PuzzleEvent::GameFinished => Topic::Progress,
        }
    }
}
