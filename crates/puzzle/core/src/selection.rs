//! Drag-selection state machine.
//!
//! ```text
//! Idle ──press(C)──▶ Dragging { anchor: C, run: [C] }
//! Dragging ──enter(C')──▶ Dragging { run: line(anchor, C') }   (sticky on rejection)
//! Dragging ──release──▶ Idle                                    (run handed to the matcher)
//! ```
//!
//! Each transition updates the transient `HIGHLIGHTED` flag of the affected
//! cells and reports exactly which cells changed through a [`HighlightDelta`].

use crate::geometry::{GeometryError, SelectionRun, resolve_line};
use crate::state::{CellIndex, Grid, Position};

/// Cells whose transient highlight was switched on or off by one transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightDelta {
    pub highlighted: Vec<CellIndex>,
    pub cleared: Vec<CellIndex>,
}

impl HighlightDelta {
    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty() && self.cleared.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Started(HighlightDelta),
    /// A gesture is already in flight; single-pointer model.
    AlreadyDragging,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// No gesture in flight.
    Stale,
    /// The target resolves to the current run.
    Unchanged,
    Updated(HighlightDelta),
    /// The pointer returned to the anchor.
    Collapsed(HighlightDelta),
    /// Target off the anchor's lines; the previous run is kept.
    Rejected(GeometryError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging {
        anchor: Position,
        run: SelectionRun,
    },
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn run(&self) -> Option<&SelectionRun> {
        match self {
            Self::Idle => None,
            Self::Dragging { run, .. } => Some(run),
        }
    }

    pub fn anchor(&self) -> Option<CellIndex> {
        self.run().map(SelectionRun::anchor)
    }

    /// Starts a gesture at `cell` and highlights it.
    pub fn press(&mut self, grid: &mut Grid, cell: CellIndex) -> Result<PressOutcome, GeometryError> {
        if self.is_dragging() {
            return Ok(PressOutcome::AlreadyDragging);
        }
        let anchor = grid
            .dimensions()
            .position_of(cell)
            .ok_or(GeometryError::IndexOutOfBounds { index: cell })?;

        grid.set_highlighted(cell, true);
        *self = Self::Dragging {
            anchor,
            run: SelectionRun::single(cell),
        };

        Ok(PressOutcome::Started(HighlightDelta {
            highlighted: vec![cell],
            cleared: Vec::new(),
        }))
    }

    /// Recomputes the run from the anchor to `cell`.
    pub fn enter(&mut self, grid: &mut Grid, cell: CellIndex) -> EnterOutcome {
        let Self::Dragging { anchor, run } = self else {
            return EnterOutcome::Stale;
        };

        let dimensions = grid.dimensions();
        let Some(target) = dimensions.position_of(cell) else {
            return EnterOutcome::Rejected(GeometryError::IndexOutOfBounds { index: cell });
        };

        if cell == run.anchor() {
            if run.is_single() {
                return EnterOutcome::Unchanged;
            }
            let cleared = run.cells()[1..].to_vec();
            for &index in &cleared {
                grid.set_highlighted(index, false);
            }
            *run = SelectionRun::single(cell);
            return EnterOutcome::Collapsed(HighlightDelta {
                highlighted: Vec::new(),
                cleared,
            });
        }

        let next = match resolve_line(dimensions, *anchor, target) {
            Ok(next) => next,
            Err(error) => return EnterOutcome::Rejected(error),
        };
        if next == *run {
            return EnterOutcome::Unchanged;
        }

        let cleared: Vec<CellIndex> = run
            .cells()
            .iter()
            .copied()
            .filter(|&index| !next.contains(index))
            .collect();
        let highlighted: Vec<CellIndex> = next
            .cells()
            .iter()
            .copied()
            .filter(|&index| !run.contains(index))
            .collect();

        for &index in &cleared {
            grid.set_highlighted(index, false);
        }
        for &index in &highlighted {
            grid.set_highlighted(index, true);
        }
        *run = next;

        EnterOutcome::Updated(HighlightDelta {
            highlighted,
            cleared,
        })
    }

    /// Ends the gesture and hands back its run. Highlights are left in place
    /// for the caller to resolve and then clear with [`clear_highlights`].
    pub fn release(&mut self) -> Option<SelectionRun> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { run, .. } => Some(run),
        }
    }
}

/// Clears every transient highlight left on the grid.
pub fn clear_highlights(grid: &mut Grid) -> HighlightDelta {
    let cleared: Vec<CellIndex> = grid.highlighted().collect();
    for &index in &cleared {
        grid.set_highlighted(index, false);
    }
    HighlightDelta {
        highlighted: Vec::new(),
        cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(&["HXXXX", "XEXXX", "XXLXX", "XXXLX", "XXXXO"]).unwrap()
    }

    fn highlighted(grid: &Grid) -> Vec<CellIndex> {
        grid.highlighted().collect()
    }

    fn idx(grid: &Grid, x: i32, y: i32) -> CellIndex {
        grid.dimensions().index_of(Position::new(x, y)).unwrap()
    }

    #[test]
    fn press_highlights_anchor() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;

        let outcome = selection.press(&mut grid, CellIndex(0)).unwrap();
        assert_eq!(
            outcome,
            PressOutcome::Started(HighlightDelta {
                highlighted: vec![CellIndex(0)],
                cleared: vec![],
            })
        );
        assert_eq!(selection.anchor(), Some(CellIndex(0)));
        assert_eq!(highlighted(&grid), vec![CellIndex(0)]);
    }

    #[test]
    fn second_press_is_ignored() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        selection.press(&mut grid, CellIndex(0)).unwrap();

        let outcome = selection.press(&mut grid, CellIndex(3)).unwrap();
        assert_eq!(outcome, PressOutcome::AlreadyDragging);
        assert_eq!(selection.anchor(), Some(CellIndex(0)));
        assert_eq!(highlighted(&grid), vec![CellIndex(0)]);
    }

    #[test]
    fn press_outside_grid_is_rejected() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        let result = selection.press(&mut grid, CellIndex(25));
        assert_eq!(
            result,
            Err(GeometryError::IndexOutOfBounds {
                index: CellIndex(25)
            })
        );
        assert!(selection.is_idle());
    }

    #[test]
    fn enter_extends_then_retracts() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        let target = idx(&grid, 0, 0);
        selection.press(&mut grid, target).unwrap();

        let target = idx(&grid, 4, 4);
        let outcome = selection.enter(&mut grid, target);
        assert!(matches!(outcome, EnterOutcome::Updated(ref delta) if delta.highlighted.len() == 4));
        assert_eq!(grid.text_of(selection.run().unwrap().cells()), "HELLO");
        assert_eq!(highlighted(&grid).len(), 5);

        let target = idx(&grid, 2, 2);
        let outcome = selection.enter(&mut grid, target);
        assert_eq!(
            outcome,
            EnterOutcome::Updated(HighlightDelta {
                highlighted: vec![],
                cleared: vec![idx(&grid, 3, 3), idx(&grid, 4, 4)],
            })
        );
        assert_eq!(grid.text_of(selection.run().unwrap().cells()), "HEL");
    }

    #[test]
    fn direction_change_replaces_run() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        let target = idx(&grid, 0, 0);
        selection.press(&mut grid, target).unwrap();
        let target = idx(&grid, 2, 2);
        selection.enter(&mut grid, target);

        let target = idx(&grid, 2, 0);
        let outcome = selection.enter(&mut grid, target);
        let EnterOutcome::Updated(delta) = outcome else {
            panic!("expected update, got {outcome:?}");
        };
        assert_eq!(delta.cleared, vec![idx(&grid, 1, 1), idx(&grid, 2, 2)]);
        assert_eq!(delta.highlighted, vec![idx(&grid, 1, 0), idx(&grid, 2, 0)]);
        assert_eq!(
            highlighted(&grid),
            vec![idx(&grid, 0, 0), idx(&grid, 1, 0), idx(&grid, 2, 0)]
        );
    }

    #[test]
    fn off_line_target_keeps_previous_run() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        let target = idx(&grid, 0, 0);
        selection.press(&mut grid, target).unwrap();
        let target = idx(&grid, 3, 3);
        selection.enter(&mut grid, target);
        let before = selection.clone();

        let target = idx(&grid, 1, 3);
        let outcome = selection.enter(&mut grid, target);
        assert!(matches!(
            outcome,
            EnterOutcome::Rejected(GeometryError::NotCollinear { .. })
        ));
        assert_eq!(selection, before);
        assert_eq!(highlighted(&grid).len(), 4);
    }

    #[test]
    fn returning_to_anchor_collapses_run() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        let anchor = idx(&grid, 0, 0);
        selection.press(&mut grid, anchor).unwrap();
        let target = idx(&grid, 4, 0);
        selection.enter(&mut grid, target);

        let outcome = selection.enter(&mut grid, anchor);
        assert!(matches!(outcome, EnterOutcome::Collapsed(ref delta) if delta.cleared.len() == 4));
        assert_eq!(highlighted(&grid), vec![anchor]);
        assert_eq!(selection.run().unwrap().cells(), &[anchor]);

        assert_eq!(selection.enter(&mut grid, anchor), EnterOutcome::Unchanged);
    }

    #[test]
    fn enter_while_idle_is_stale() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        assert_eq!(selection.enter(&mut grid, CellIndex(3)), EnterOutcome::Stale);
        assert!(highlighted(&grid).is_empty());
    }

    #[test]
    fn release_returns_run_and_resets() {
        let mut grid = grid();
        let mut selection = SelectionState::Idle;
        assert_eq!(selection.release(), None);

        let target = idx(&grid, 0, 0);
        selection.press(&mut grid, target).unwrap();
        let target = idx(&grid, 0, 2);
        selection.enter(&mut grid, target);
        let run = selection.release().unwrap();
        assert_eq!(run.len(), 3);
        assert!(selection.is_idle());

        let delta = clear_highlights(&mut grid);
        assert_eq!(delta.cleared, run.cells().to_vec());
        assert!(highlighted(&grid).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dragging_state_with_empty_run_is_rejected() {
        let text = "Dragging(anchor: (x: 0, y: 0), run: (cells: [], direction: None))";
        assert!(ron::from_str::<SelectionState>(text).is_err());
    }
}
