//! Presentation boundary.
//!
//! The controller never touches a display directly. Every visible change is
//! pushed through a [`RenderSink`], one call per affected cell or word.
use puzzle_core::{CellIndex, Color, SolvedWord};

/// Receives visual updates from the controller.
pub trait RenderSink {
    /// Switches the transient highlight of `cell` on or off.
    ///
    /// `tint` carries the color the next solved word will receive while the
    /// highlight is on, and is `None` when clearing.
    fn set_highlight(&mut self, cell: CellIndex, on: bool, tint: Option<Color>);

    /// Paints the cells of a freshly solved word.
    fn mark_solved(&mut self, solved: &SolvedWord);

    /// Called once, after the last word is solved.
    fn finished(&mut self) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn set_highlight(&mut self, cell: CellIndex, on: bool, tint: Option<Color>) {
        (**self).set_highlight(cell, on, tint);
    }

    fn mark_solved(&mut self, solved: &SolvedWord) {
        (**self).mark_solved(solved);
    }

    fn finished(&mut self) {
        (**self).finished();
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn set_highlight(&mut self, cell: CellIndex, on: bool, tint: Option<Color>) {
        (**self).set_highlight(cell, on, tint);
    }

    fn mark_solved(&mut self, solved: &SolvedWord) {
        (**self).mark_solved(solved);
    }

    fn finished(&mut self) {
        (**self).finished();
    }
}

/// Discards every update. Useful for headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn set_highlight(&mut self, _cell: CellIndex, _on: bool, _tint: Option<Color>) {}

    fn mark_solved(&mut self, _solved: &SolvedWord) {}
}
