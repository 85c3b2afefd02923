//! Data-driven puzzle content and loaders.
//!
//! This crate turns static puzzle data into initial [`puzzle_core::PuzzleState`]s:
//! - Word placements expanded into letter grids
//! - Puzzle definitions (data-driven via RON)
//! - Plain word lists (`.list`, one word per line)
//! - Session configuration (data-driven via TOML)
//!
//! Content is consumed once at session start and never appears in live state.

pub mod placement;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use placement::{PlacementError, WordPlacement, letters_from_placements};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, LoadResult, PuzzleDefinition, PuzzleLayout, PuzzleLoader, WordListLoader,
};
