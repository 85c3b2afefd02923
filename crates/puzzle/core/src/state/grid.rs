use std::fmt;

use bitflags::bitflags;

use crate::error::{ErrorSeverity, PuzzleError};
use crate::state::WordId;

/// Row-major index of a cell in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex(pub u32);

impl CellIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    pub fn contains_index(&self, index: CellIndex) -> bool {
        index.get() < self.cell_count()
    }

    /// Row-major index for `position`, or `None` when it lies off the grid.
    pub fn index_of(&self, position: Position) -> Option<CellIndex> {
        if !self.contains(position) {
            return None;
        }
        let index = position.y as u32 * self.width + position.x as u32;
        Some(CellIndex(index))
    }

    /// Column/row of `index`, or `None` when it lies past the last cell.
    pub fn position_of(&self, index: CellIndex) -> Option<Position> {
        if !self.contains_index(index) {
            return None;
        }
        Some(Position::new(
            (index.0 % self.width) as i32,
            (index.0 / self.width) as i32,
        ))
    }
}

bitflags! {
    /// Visual state bits carried by a cell.
    ///
    /// `HIGHLIGHTED` is transient and only set while a drag covers the cell.
    /// `SOLVED` is persistent once any solved word passes through the cell.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const HIGHLIGHTED = 1 << 0;
        const SOLVED      = 1 << 1;
    }
}

/// Single rendering state for a cell, highlight taking precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CellVisual {
    Unselected,
    Highlighted,
    Solved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    letter: char,
    flags: CellFlags,
    /// Solved words passing through this cell, in solve order.
    solved_by: Vec<WordId>,
}

impl Cell {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            flags: CellFlags::empty(),
            solved_by: Vec::new(),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(CellFlags::HIGHLIGHTED)
    }

    pub fn is_solved(&self) -> bool {
        self.flags.contains(CellFlags::SOLVED)
    }

    pub fn solved_by(&self) -> &[WordId] {
        &self.solved_by
    }

    pub fn visual(&self) -> CellVisual {
        if self.is_highlighted() {
            CellVisual::Highlighted
        } else if self.is_solved() {
            CellVisual::Solved
        } else {
            CellVisual::Unselected
        }
    }

    /// Returns true if the flag actually changed.
    pub(crate) fn set_highlighted(&mut self, highlighted: bool) -> bool {
        let before = self.is_highlighted();
        self.flags.set(CellFlags::HIGHLIGHTED, highlighted);
        before != highlighted
    }

    pub(crate) fn add_solved(&mut self, word: WordId) {
        if !self.solved_by.contains(&word) {
            self.solved_by.push(word);
        }
        self.flags.insert(CellFlags::SOLVED);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("grid of {width}x{height} cells does not fit a 32-bit cell index")]
    TooLarge { width: u32, height: u32 },

    #[error("expected {expected} letters, got {actual}")]
    LetterCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl PuzzleError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroDimension { .. } => "GRID_ZERO_DIMENSION",
            Self::TooLarge { .. } => "GRID_TOO_LARGE",
            Self::LetterCountMismatch { .. } => "GRID_LETTER_COUNT_MISMATCH",
            Self::RaggedRow { .. } => "GRID_RAGGED_ROW",
        }
    }
}

/// Fixed-size letter grid owning every cell in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::check(raw.dimensions, raw.cells.len())?;
        Ok(Self {
            dimensions: raw.dimensions,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Builds a grid from row-major letters.
    pub fn new<I>(dimensions: GridDimensions, letters: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = char>,
    {
        let cells: Vec<Cell> = letters.into_iter().map(Cell::new).collect();
        Self::check(dimensions, cells.len())?;
        Ok(Self { dimensions, cells })
    }

    fn check(dimensions: GridDimensions, cell_count: usize) -> Result<(), GridError> {
        let GridDimensions { width, height } = dimensions;
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if (width as u64) * (height as u64) > u32::MAX as u64 {
            return Err(GridError::TooLarge { width, height });
        }
        if cell_count != dimensions.cell_count() {
            return Err(GridError::LetterCountMismatch {
                expected: dimensions.cell_count(),
                actual: cell_count,
            });
        }
        Ok(())
    }

    /// Builds a grid from equal-length rows of letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        for (row, text) in rows.iter().enumerate() {
            let actual = text.as_ref().chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
        }

        let dimensions = GridDimensions::new(width as u32, rows.len() as u32);
        Self::new(dimensions, rows.iter().flat_map(|row| row.as_ref().chars()))
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index.get())
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> Option<&mut Cell> {
        self.cells.get_mut(index.get())
    }

    pub fn cell_at(&self, position: Position) -> Option<&Cell> {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.cell(index))
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (CellIndex(index as u32), cell))
    }

    /// Concatenates the letters at `indices`, in order. Unknown indices are skipped.
    pub fn text_of(&self, indices: &[CellIndex]) -> String {
        indices
            .iter()
            .filter_map(|&index| self.cell(index))
            .map(Cell::letter)
            .collect()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_highlighted())
            .map(|(index, _)| index)
    }

    /// Sets the transient highlight; returns true if the cell changed.
    pub(crate) fn set_highlighted(&mut self, index: CellIndex, highlighted: bool) -> bool {
        self.cell_mut(index)
            .is_some_and(|cell| cell.set_highlighted(highlighted))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.dimensions.width as usize).max(1);
        for (row, chunk) in self.cells.chunks(width).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_position_are_row_major() {
        let dims = GridDimensions::new(4, 3);
        assert_eq!(dims.index_of(Position::new(0, 0)), Some(CellIndex(0)));
        assert_eq!(dims.index_of(Position::new(3, 0)), Some(CellIndex(3)));
        assert_eq!(dims.index_of(Position::new(1, 2)), Some(CellIndex(9)));
        assert_eq!(dims.position_of(CellIndex(9)), Some(Position::new(1, 2)));
        assert_eq!(dims.position_of(CellIndex(12)), None);
    }

    #[test]
    fn off_grid_positions_have_no_index() {
        let dims = GridDimensions::new(4, 6);
        assert_eq!(dims.index_of(Position::new(4, 0)), None);
        assert_eq!(dims.index_of(Position::new(-1, 2)), None);
        assert_eq!(dims.index_of(Position::new(0, 6)), None);
    }

    #[test]
    fn rejects_zero_dimension() {
        let result = Grid::new(GridDimensions::new(0, 3), std::iter::empty::<char>());
        assert_eq!(
            result,
            Err(GridError::ZeroDimension {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn rejects_wrong_letter_count() {
        let result = Grid::new(GridDimensions::new(2, 2), "ABC".chars());
        assert_eq!(
            result,
            Err(GridError::LetterCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = Grid::from_rows(&["ABC", "DE"]);
        assert_eq!(
            result,
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn text_of_follows_index_order() {
        let grid = Grid::from_rows(&["CAT", "DOG"]).unwrap();
        let indices = [CellIndex(2), CellIndex(1), CellIndex(0)];
        assert_eq!(grid.text_of(&indices), "TAC");
        assert_eq!(grid.to_string(), "CAT\nDOG");
    }

    #[test]
    fn highlight_takes_precedence_over_solved() {
        let mut cell = Cell::new('A');
        assert_eq!(cell.visual(), CellVisual::Unselected);

        cell.add_solved(WordId(0));
        assert_eq!(cell.visual(), CellVisual::Solved);

        assert!(cell.set_highlighted(true));
        assert!(!cell.set_highlighted(true));
        assert_eq!(cell.visual(), CellVisual::Highlighted);

        cell.set_highlighted(false);
        assert_eq!(cell.visual(), CellVisual::Solved);
    }

    #[test]
    fn solved_layers_are_not_duplicated() {
        let mut cell = Cell::new('A');
        cell.add_solved(WordId(1));
        cell.add_solved(WordId(3));
        cell.add_solved(WordId(1));
        assert_eq!(cell.solved_by(), &[WordId(1), WordId(3)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_grid_is_validated() {
        let error =
            ron::from_str::<Grid>("(dimensions: (width: 0, height: 0), cells: [])").unwrap_err();
        assert!(error.to_string().contains("must be non-zero"));

        let error =
            ron::from_str::<Grid>("(dimensions: (width: 2, height: 1), cells: [])").unwrap_err();
        assert!(error.to_string().contains("expected 2 letters, got 0"));

        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let restored: Grid = ron::from_str(&ron::to_string(&grid).unwrap()).unwrap();
        assert_eq!(restored.to_string(), "AB\nCD");
    }
}
