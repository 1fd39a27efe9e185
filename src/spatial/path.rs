//! Ordered cell sequences that spell a word

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::spatial::grid::{LetterGrid, Position, are_adjacent};

/// Ordered positions, one per letter of a word
///
/// Paths produced by the generator always have 4-adjacent consecutive
/// positions and never repeat a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementPath {
    positions: Vec<Position>,
}

impl PlacementPath {
    /// Wrap a sequence of positions without validation
    pub const fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Positions in reading order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Test if the path has no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// First position of the path
    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Test that consecutive positions are orthogonal neighbours
    pub fn is_contiguous(&self) -> bool {
        self.positions
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if are_adjacent(*a, *b)))
    }

    /// Test that no position appears twice
    pub fn is_self_avoiding(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.positions.len());
        self.positions.iter().all(|p| seen.insert(*p))
    }

    /// Test both path invariants at once
    pub fn is_valid(&self) -> bool {
        self.is_contiguous() && self.is_self_avoiding()
    }

    /// Number of times the walking direction changes
    ///
    /// A straight run scores 0, a staircase scores one per step after the first.
    pub fn direction_changes(&self) -> usize {
        let steps: Vec<[isize; 2]> = self
            .positions
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some(step(*a, *b)),
                _ => None,
            })
            .collect();

        steps
            .windows(2)
            .filter(|pair| matches!(pair, [a, b] if a != b))
            .count()
    }

    /// Letters read from the grid along the path
    pub fn spell(&self, grid: &LetterGrid) -> Option<String> {
        grid.read(&self.positions)
    }
}

impl From<Vec<Position>> for PlacementPath {
    fn from(positions: Vec<Position>) -> Self {
        Self::new(positions)
    }
}

fn step(from: Position, to: Position) -> [isize; 2] {
    [
        to[0] as isize - from[0] as isize,
        to[1] as isize - from[1] as isize,
    ]
}
