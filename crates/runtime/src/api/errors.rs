//! Errors surfaced by the puzzle controller.
//!
//! Gesture problems (stale events, off-line targets, out-of-range cells) are
//! absorbed by the controller and never reach this type. Only failures that
//! leave the session unable to continue safely are returned.
use puzzle_core::{ErrorSeverity, MatchError, PuzzleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ControllerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("failed to resolve released selection")]
    Match(#[from] MatchError),
}

impl PuzzleError for ControllerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Match(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Match(error) => error.error_code(),
        }
    }
}
