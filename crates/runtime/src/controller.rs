//! Gesture orchestration.
//!
//! [`PuzzleController`] owns the session state and turns pointer gestures into
//! selection transitions and word resolutions. Visible changes are forwarded to
//! a [`RenderSink`]; stale or invalid gestures are dropped silently.
use puzzle_core::{
    CellIndex, EnterOutcome, GeometryError, HighlightDelta, MatchOutcome, Position, PressOutcome,
    PuzzleError, PuzzleState, Resolution, WordMatcher, clear_highlights,
};

use crate::api::{ControllerError, RenderSink, Result};

/// Pointer input, already mapped to cell identity by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(CellIndex),
    Enter(CellIndex),
    Release,
    /// Pointer left the grid or the gesture was aborted.
    Cancel,
}

pub struct PuzzleController<S: RenderSink> {
    state: PuzzleState,
    matcher: WordMatcher,
    sink: S,
}

impl<S: RenderSink> PuzzleController<S> {
    pub fn new(state: PuzzleState, sink: S) -> Self {
        Self {
            state,
            matcher: WordMatcher,
            sink,
        }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (PuzzleState, S) {
        (self.state, self.sink)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Dispatches a single input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Press(cell) => {
                self.press(cell);
            }
            InputEvent::Enter(cell) => {
                self.enter(cell);
            }
            InputEvent::Release => {
                self.release()?;
            }
            InputEvent::Cancel => {
                self.cancel();
            }
        }
        Ok(())
    }

    /// Starts a selection at `cell`. Returns whether a gesture was started.
    pub fn press(&mut self, cell: CellIndex) -> bool {
        if self.state.is_finished() {
            tracing::trace!("Ignoring press at {}: puzzle finished", cell);
            return false;
        }

        match self.state.selection.press(&mut self.state.grid, cell) {
            Ok(PressOutcome::Started(delta)) => {
                tracing::debug!("Selection started at {}", cell);
                self.render(&delta);
                true
            }
            Ok(PressOutcome::AlreadyDragging) => {
                tracing::trace!("Ignoring press at {}: gesture in flight", cell);
                false
            }
            Err(error) => {
                tracing::trace!("Ignoring press: {}", error);
                false
            }
        }
    }

    /// Moves the selection endpoint to `cell`.
    pub fn enter(&mut self, cell: CellIndex) -> EnterOutcome {
        if self.state.is_finished() {
            tracing::trace!("Ignoring enter at {}: puzzle finished", cell);
            return EnterOutcome::Stale;
        }

        let outcome = self.state.selection.enter(&mut self.state.grid, cell);
        match &outcome {
            EnterOutcome::Updated(delta) => {
                tracing::debug!(
                    "Selection now spans {} cells ending at {}",
                    self.state.selection.run().map_or(0, |run| run.len()),
                    cell
                );
                self.render(delta);
            }
            EnterOutcome::Collapsed(delta) => {
                tracing::debug!("Selection collapsed to anchor {}", cell);
                self.render(delta);
            }
            EnterOutcome::Rejected(error) => {
                tracing::trace!(
                    "Keeping selection, {} target rejected: {}",
                    error.severity(),
                    error
                );
            }
            EnterOutcome::Stale => {
                tracing::trace!("Ignoring enter at {}: no gesture in flight", cell);
            }
            EnterOutcome::Unchanged => {}
        }
        outcome
    }

    /// [`press`](Self::press) with a grid coordinate, bounds-checked first.
    pub fn press_at(&mut self, position: Position) -> bool {
        match self.state.grid.dimensions().index_of(position) {
            Some(cell) => self.press(cell),
            None => {
                tracing::trace!("Ignoring press outside grid at {}", position);
                false
            }
        }
    }

    /// [`enter`](Self::enter) with a grid coordinate, bounds-checked first.
    ///
    /// Coordinates outside the grid never reach the line resolver; the current
    /// selection is kept.
    pub fn enter_at(&mut self, position: Position) -> EnterOutcome {
        match self.state.grid.dimensions().index_of(position) {
            Some(cell) => self.enter(cell),
            None => {
                tracing::trace!("Ignoring enter outside grid at {}", position);
                EnterOutcome::Rejected(GeometryError::OutOfBounds { position })
            }
        }
    }

    /// Ends the gesture and resolves the selected run.
    ///
    /// Returns `Ok(None)` when no gesture was in flight. Highlights are swept
    /// on every call, whatever the outcome.
    pub fn release(&mut self) -> Result<Option<Resolution>> {
        let Some(run) = self.state.selection.release() else {
            tracing::trace!("Ignoring release: no gesture in flight");
            self.sweep();
            return Ok(None);
        };

        let resolved = self.matcher.resolve(&mut self.state, &run);
        let resolution = match resolved {
            Ok(resolution) => resolution,
            Err(error) => {
                tracing::error!(
                    "[{}] {} error while resolving selection: {}",
                    error.error_code(),
                    error.severity(),
                    error
                );
                self.sweep();
                return Err(ControllerError::from(error));
            }
        };

        match &resolution.outcome {
            MatchOutcome::Solved(solved) => {
                tracing::info!(
                    "Solved '{}' ({}) with {}, {} remaining",
                    solved.text,
                    solved.word,
                    solved.color,
                    self.state.remaining()
                );
                self.sink.mark_solved(solved);
            }
            MatchOutcome::NoMatch { text } => {
                tracing::debug!("Released '{}': no unsolved word matches", text);
            }
        }

        self.sweep();

        if resolution.completed {
            tracing::info!("All {} words solved, puzzle finished", self.state.words.len());
            self.sink.finished();
        }

        Ok(Some(resolution))
    }

    /// Drops the gesture in flight without resolving it.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.state.selection.release().is_some();
        if cancelled {
            tracing::debug!("Selection cancelled");
        }
        self.sweep();
        cancelled
    }

    /// Clears any transient highlight left on the grid.
    fn sweep(&mut self) {
        let delta = clear_highlights(&mut self.state.grid);
        if !delta.is_empty() {
            tracing::trace!("Swept {} highlighted cells", delta.cleared.len());
        }
        self.render(&delta);
    }

    fn render(&mut self, delta: &HighlightDelta) {
        let tint = self.state.words.next_color();
        for &cell in &delta.cleared {
            self.sink.set_highlight(cell, false, None);
        }
        for &cell in &delta.highlighted {
            self.sink.set_highlight(cell, true, tint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, PuzzleEvent};
    use puzzle_core::{Grid, PuzzleConfig};

    fn controller(words: &[&str]) -> PuzzleController<EventLog> {
        let grid = Grid::from_rows(&["CAT", "XOX", "XXW"]).unwrap();
        let state =
            PuzzleState::with_words(grid, words.iter().copied(), &PuzzleConfig::default()).unwrap();
        PuzzleController::new(state, EventLog::new())
    }

    #[test]
    fn highlight_events_carry_pending_color() {
        let mut controller = controller(&["CAT"]);
        let pending = controller.state().words.next_color();
        assert!(pending.is_some());

        assert!(controller.press(CellIndex(0)));
        assert_eq!(
            controller.sink().events(),
            &[PuzzleEvent::Highlighted {
                cell: CellIndex(0),
                tint: pending
            }]
        );
    }

    #[test]
    fn handle_dispatches_full_gesture() {
        let mut controller = controller(&["CAT"]);
        for event in [
            InputEvent::Press(CellIndex(0)),
            InputEvent::Enter(CellIndex(2)),
            InputEvent::Release,
        ] {
            controller.handle(event).unwrap();
        }

        assert!(controller.is_finished());
        let events = controller.sink().events();
        assert!(matches!(events.last(), Some(PuzzleEvent::GameFinished)));
        assert_eq!(controller.state().grid.highlighted().count(), 0);
    }

    #[test]
    fn solved_event_uses_configured_alpha() {
        let grid = Grid::from_rows(&["CAT", "XOX", "XXW"]).unwrap();
        let config = PuzzleConfig::default().with_solved_alpha(0x60);
        let state = PuzzleState::with_words(grid, ["CAT", "COW"], &config).unwrap();
        let mut controller = PuzzleController::new(state, EventLog::new());
        let color = controller.state().words.next_color().unwrap();

        controller.press(CellIndex(0));
        controller.enter(CellIndex(2));
        controller.release().unwrap();

        let background = controller.sink().events().iter().find_map(|event| match event {
            PuzzleEvent::WordSolved { background, .. } => Some(background.clone()),
            _ => None,
        });
        assert_eq!(background, Some(color.to_hex_with_alpha(0x60)));
        assert_eq!(
            controller.state().solved_background(puzzle_core::WordId(0)),
            background
        );
    }

    #[test]
    fn cancel_discards_selection() {
        let mut controller = controller(&["CAT"]);
        controller.press(CellIndex(0));
        controller.enter(CellIndex(2));

        assert!(controller.cancel());
        assert!(controller.state().selection.is_idle());
        assert_eq!(controller.state().remaining(), 1);
        assert_eq!(controller.state().grid.highlighted().count(), 0);
        assert!(!controller.cancel());
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut controller = controller(&["CAT"]);
        let before = controller.state().clone();

        assert_eq!(controller.release(), Ok(None));
        assert_eq!(controller.state(), &before);
        assert!(controller.sink().is_empty());
    }
}
