//! Runtime orchestration for word-search sessions.
//!
//! This crate wires the pure rules of `puzzle-core` to pointer input and a
//! presentation layer. Hosts embed [`PuzzleController`], feed it gestures, and
//! observe the results through a [`RenderSink`].
//!
//! Modules are organized by responsibility:
//! - [`controller`] hosts the gesture orchestrator
//! - [`api`] exposes the render boundary and error types
//! - [`events`] records render calls as replayable events
//! - [`bootstrap`] assembles sessions from content files
pub mod api;
pub mod bootstrap;
pub mod controller;
pub mod events;

pub use api::{ControllerError, NullSink, RenderSink, Result};
pub use bootstrap::SessionSources;
pub use controller::{InputEvent, PuzzleController};
pub use events::{EventLog, PuzzleEvent, Topic};
