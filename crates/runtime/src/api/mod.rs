//! Public runtime API surface.
//!
//! Types hosts interact with when embedding a [`crate::PuzzleController`].

pub mod errors;
pub mod render;

pub use errors::{ControllerError, Result};
pub use render::{NullSink, RenderSink};
