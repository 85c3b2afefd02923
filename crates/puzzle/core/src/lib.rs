//! Deterministic word-search rules shared by every front end.
//!
//! `puzzle-core` defines the grid, the drag-selection state machine, word
//! matching and win detection. It exposes pure APIs with no rendering or I/O
//! concerns; hosts drive it through [`PuzzleState`] and react to the highlight
//! deltas and match outcomes it returns.
pub mod config;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod palette;
pub mod selection;
pub mod state;

pub use config::{ChannelRange, PaletteConfig, PuzzleConfig};
pub use error::{ErrorSeverity, PuzzleError};
pub use geometry::{Direction, GeometryError, SelectionRun, resolve_indices, resolve_line};
pub use matcher::{MatchError, MatchOutcome, Resolution, SolvedWord, WordMatcher};
pub use palette::{ColorPalette, PcgRng};
pub use selection::{EnterOutcome, HighlightDelta, PressOutcome, SelectionState, clear_highlights};
pub use state::{
    Cell, CellFlags, CellIndex, CellVisual, Color, ColorPool, GameStatus, Grid, GridDimensions,
    GridError, Position, PuzzleState, WordEntry, WordId, WordList, WordListError,
};
