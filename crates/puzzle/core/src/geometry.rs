//! Straight-line resolution between two grid cells.
//!
//! A selection is only valid along one of the eight compass lines through its
//! anchor. [`resolve_line`] decides collinearity and enumerates the cells from
//! anchor to target. It is pure: it reads dimensions only, never cell state.

use crate::error::{ErrorSeverity, PuzzleError};
use crate::state::{CellIndex, GridDimensions, Position};

/// One of the eight directions a run can follow. Rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step `(dx, dy)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction of a unit step; `None` for `(0, 0)` or non-unit components.
    pub fn from_step(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (dx, dy))
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    #[error("position {position} is outside the grid")]
    OutOfBounds { position: Position },

    #[error("cell {index} is outside the grid")]
    IndexOutOfBounds { index: CellIndex },

    #[error("{target} is not on a straight line from {anchor}")]
    NotCollinear { anchor: Position, target: Position },

    #[error("selection run has no cells")]
    EmptyRun,

    #[error("selection run of {len} cells disagrees with its direction")]
    DirectionMismatch { len: usize },
}

impl PuzzleError for GeometryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotCollinear { .. } => ErrorSeverity::Recoverable,
            Self::OutOfBounds { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::EmptyRun
            | Self::DirectionMismatch { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GEOMETRY_OUT_OF_BOUNDS",
            Self::IndexOutOfBounds { .. } => "GEOMETRY_INDEX_OUT_OF_BOUNDS",
            Self::NotCollinear { .. } => "GEOMETRY_NOT_COLLINEAR",
            Self::EmptyRun => "GEOMETRY_EMPTY_RUN",
            Self::DirectionMismatch { .. } => "GEOMETRY_DIRECTION_MISMATCH",
        }
    }
}

/// Ordered cells from anchor to endpoint along a single direction.
///
/// Never empty: `cells[0]` is always `anchor`. `direction` is `None` only for
/// the single-cell run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawSelectionRun", into = "RawSelectionRun")
)]
pub struct SelectionRun {
    anchor: CellIndex,
    cells: Vec<CellIndex>,
    direction: Option<Direction>,
}

/// Wire form of [`SelectionRun`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSelectionRun {
    cells: Vec<CellIndex>,
    direction: Option<Direction>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSelectionRun> for SelectionRun {
    type Error = GeometryError;

    fn try_from(raw: RawSelectionRun) -> Result<Self, Self::Error> {
        let Some(&anchor) = raw.cells.first() else {
            return Err(GeometryError::EmptyRun);
        };
        if raw.direction.is_some() != (raw.cells.len() > 1) {
            return Err(GeometryError::DirectionMismatch {
                len: raw.cells.len(),
            });
        }
        Ok(Self {
            anchor,
            cells: raw.cells,
            direction: raw.direction,
        })
    }
}

#[cfg(feature = "serde")]
impl From<SelectionRun> for RawSelectionRun {
    fn from(run: SelectionRun) -> Self {
        Self {
            cells: run.cells,
            direction: run.direction,
        }
    }
}

impl SelectionRun {
    pub fn single(anchor: CellIndex) -> Self {
        Self {
            anchor,
            cells: vec![anchor],
            direction: None,
        }
    }

    pub fn anchor(&self) -> CellIndex {
        self.anchor
    }

    pub fn end(&self) -> CellIndex {
        self.cells.last().copied().unwrap_or(self.anchor)
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A run always holds its anchor.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.cells.len() == 1
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }
}

/// Resolves the run from `anchor` to `target`, both inclusive.
pub fn resolve_line(
    dimensions: GridDimensions,
    anchor: Position,
    target: Position,
) -> Result<SelectionRun, GeometryError> {
    let anchor_index = dimensions
        .index_of(anchor)
        .ok_or(GeometryError::OutOfBounds { position: anchor })?;
    if !dimensions.contains(target) {
        return Err(GeometryError::OutOfBounds { position: target });
    }

    let dx = target.x - anchor.x;
    let dy = target.y - anchor.y;
    if dx == 0 && dy == 0 {
        return Ok(SelectionRun::single(anchor_index));
    }
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return Err(GeometryError::NotCollinear { anchor, target });
    }

    // signum() maps a zero delta to a zero step.
    let (step_x, step_y) = (dx.signum(), dy.signum());
    let direction = Direction::from_step(step_x, step_y);
    let steps = dx.abs().max(dy.abs());

    let mut cells = Vec::with_capacity(steps as usize + 1);
    let mut position = anchor;
    for _ in 0..=steps {
        // Every intermediate position lies between two in-bounds endpoints.
        let index = dimensions
            .index_of(position)
            .ok_or(GeometryError::OutOfBounds { position })?;
        cells.push(index);
        position = Position::new(position.x + step_x, position.y + step_y);
    }

    Ok(SelectionRun {
        anchor: anchor_index,
        cells,
        direction,
    })
}

/// Index-addressed form of [`resolve_line`].
pub fn resolve_indices(
    dimensions: GridDimensions,
    anchor: CellIndex,
    target: CellIndex,
) -> Result<SelectionRun, GeometryError> {
    let anchor = dimensions
        .position_of(anchor)
        .ok_or(GeometryError::IndexOutOfBounds { index: anchor })?;
    let target = dimensions
        .position_of(target)
        .ok_or(GeometryError::IndexOutOfBounds { index: target })?;
    resolve_line(dimensions, anchor, target)
}
