//! Session bootstrap from content files.
//!
//! Gathers the puzzle definition, an optional plain word list overriding the
//! definition's words, and an optional TOML config, then builds a ready
//! [`PuzzleController`].
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use puzzle_content::{ConfigLoader, PuzzleLoader, WordListLoader};
use puzzle_core::{PuzzleConfig, PuzzleState};

use crate::api::RenderSink;
use crate::controller::PuzzleController;

/// File locations for one session.
#[derive(Clone, Debug)]
pub struct SessionSources {
    pub puzzle: PathBuf,
    pub words: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl SessionSources {
    pub fn new(puzzle: impl Into<PathBuf>) -> Self {
        Self {
            puzzle: puzzle.into(),
            words: None,
            config: None,
        }
    }

    /// Read locations from the process environment.
    ///
    /// Environment variables:
    /// - `PUZZLE_FILE` - RON puzzle definition (required)
    /// - `PUZZLE_WORDS` - `.list` word list replacing the definition's words
    /// - `PUZZLE_CONFIG` - TOML session configuration
    pub fn from_env() -> Option<Self> {
        let mut sources = Self::new(env::var_os("PUZZLE_FILE")?);
        sources.words = env::var_os("PUZZLE_WORDS").map(PathBuf::from);
        sources.config = env::var_os("PUZZLE_CONFIG").map(PathBuf::from);
        Some(sources)
    }

    pub fn words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = Some(path.into());
        self
    }

    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    pub fn load_config(&self) -> Result<PuzzleConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => Ok(PuzzleConfig::default()),
        }
    }

    /// Loads and validates every source into a fresh session state.
    pub fn load_state(&self) -> Result<PuzzleState> {
        let config = self.load_config()?;
        let mut definition = PuzzleLoader::load(&self.puzzle)?;
        if let Some(path) = &self.words {
            definition.words = WordListLoader::load(path)?;
        }

        let state = definition.build(&config)?;
        tracing::info!(
            "Loaded {}x{} puzzle with {} words from {}",
            state.grid.width(),
            state.grid.height(),
            state.words.len(),
            self.puzzle.display()
        );
        Ok(state)
    }

    pub fn build<S: RenderSink>(&self, sink: S) -> Result<PuzzleController<S>> {
        Ok(PuzzleController::new(self.load_state()?, sink))
    }
}
