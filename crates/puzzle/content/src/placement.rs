//! Word placements and their expansion into a letter grid.
//!
//! A placement says where a word starts and which way it runs. Expanding a set
//! of placements gives the letter at every covered cell; uncovered cells get a
//! filler character. Overlaps are allowed only where the letters agree.

use std::collections::HashMap;

use puzzle_core::{Direction, GridDimensions, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordPlacement {
    pub origin: Position,
    pub direction: Direction,
    pub word: String,
}

impl WordPlacement {
    pub fn new(origin: Position, direction: Direction, word: impl Into<String>) -> Self {
        Self {
            origin,
            direction,
            word: word.into(),
        }
    }

    /// Position and letter of every character in the word, in order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let (dx, dy) = self.direction.delta();
        self.word.chars().enumerate().map(move |(i, letter)| {
            let i = i as i32;
            (
                Position::new(self.origin.x + dx * i, self.origin.y + dy * i),
                letter,
            )
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("word '{word}' leaves the grid at {position}")]
    OutOfBounds { word: String, position: Position },

    #[error("conflicting letters at {position}: '{existing}' vs '{incoming}' from '{word}'")]
    Conflict {
        word: String,
        position: Position,
        existing: char,
        incoming: char,
    },
}

/// Row-major letters for a `dimensions` grid covered by `placements`.
pub fn letters_from_placements(
    dimensions: GridDimensions,
    placements: &[WordPlacement],
    filler: char,
) -> Result<Vec<char>, PlacementError> {
    let mut letters: HashMap<Position, char> = HashMap::new();

    for placement in placements {
        for (position, incoming) in placement.cells() {
            if !dimensions.contains(position) {
                return Err(PlacementError::OutOfBounds {
                    word: placement.word.clone(),
                    position,
                });
            }
            match letters.get(&position) {
                Some(&existing) if existing != incoming => {
                    return Err(PlacementError::Conflict {
                        word: placement.word.clone(),
                        position,
                        existing,
                        incoming,
                    });
                }
                Some(_) => {}
                None => {
                    letters.insert(position, incoming);
                }
            }
        }
    }

    let mut grid = Vec::with_capacity(dimensions.cell_count());
    for y in 0..dimensions.height as i32 {
        for x in 0..dimensions.width as i32 {
            let letter = letters
                .get(&Position::new(x, y))
                .copied()
                .unwrap_or(filler);
            grid.push(letter);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_placements_with_filler() {
        let dims = GridDimensions::new(4, 3);
        let placements = [
            WordPlacement::new(Position::new(0, 0), Direction::East, "CAT"),
            WordPlacement::new(Position::new(0, 0), Direction::South, "COW"),
            WordPlacement::new(Position::new(3, 2), Direction::NorthWest, "DEA"),
        ];
        let letters = letters_from_placements(dims, &placements, '*').unwrap();
        let rows: String = letters.into_iter().collect();
        assert_eq!(rows, "CAT*O*E*W**D");
    }

    #[test]
    fn rejects_placement_leaving_grid() {
        let dims = GridDimensions::new(3, 3);
        let placements = [WordPlacement::new(
            Position::new(1, 1),
            Direction::SouthEast,
            "DOG",
        )];
        assert_eq!(
            letters_from_placements(dims, &placements, '*'),
            Err(PlacementError::OutOfBounds {
                word: "DOG".to_string(),
                position: Position::new(3, 3),
            })
        );
    }

    #[test]
    fn rejects_conflicting_overlap() {
        let dims = GridDimensions::new(3, 3);
        let placements = [
            WordPlacement::new(Position::new(0, 0), Direction::East, "CAT"),
            WordPlacement::new(Position::new(1, 0), Direction::South, "BEE"),
        ];
        assert!(matches!(
            letters_from_placements(dims, &placements, '*'),
            Err(PlacementError::Conflict {
                existing: 'A',
                incoming: 'B',
                ..
            })
        ));
    }
}
