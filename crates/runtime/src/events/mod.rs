//! Presentation events.
//!
//! [`EventLog`] implements [`crate::RenderSink`] by recording each call as a
//! [`PuzzleEvent`], so hosts can replay or inspect what was rendered.

mod log;
mod types;

pub use log::EventLog;
pub use types::{PuzzleEvent, Topic};
