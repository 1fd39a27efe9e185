//! Letter grid storage and orthogonal neighbourhoods
//!
//! A grid cell is either empty (`None`) or holds one uppercase letter. The
//! generator builds a fresh grid for every board attempt and never shares one
//! between attempts.

use ndarray::Array2;
use std::fmt;

use crate::spatial::path::PlacementPath;

/// Grid coordinate as `[row, col]`
pub type Position = [usize; 2];

/// Offsets for up, down, left and right; diagonals are not adjacent
pub const ORTHOGONAL_OFFSETS: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Rectangular letter matrix that forms the puzzle surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<char>>,
}

impl LetterGrid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Build a grid from row strings; `.` and spaces stand for empty cells
    ///
    /// Short rows are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, letter) in row.chars().enumerate() {
                if letter != '.' && letter != ' ' {
                    grid.set([r, c], letter);
                }
            }
        }
        grid
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Letter at a position, `None` if empty or out of bounds
    pub fn get(&self, position: Position) -> Option<char> {
        self.cells.get(position).copied().flatten()
    }

    /// Check that a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.rows() && position[1] < self.cols()
    }

    /// Test if a position is inside the grid and empty
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.cells.get(position).is_some_and(Option::is_none)
    }

    /// A cell accepts a letter when it is empty or already holds that letter
    pub fn accepts(&self, position: Position, letter: char) -> bool {
        self.cells
            .get(position)
            .is_some_and(|cell| cell.is_none_or(|existing| existing == letter))
    }

    /// Write a letter, ignoring out of bounds positions
    pub fn set(&mut self, position: Position, letter: char) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = Some(letter);
        }
    }

    /// Check that writing `word` along `path` would not overwrite another letter
    pub fn can_write(&self, word: &[char], path: &PlacementPath) -> bool {
        word.len() == path.len()
            && path
                .positions()
                .iter()
                .zip(word)
                .all(|(&position, &letter)| self.accepts(position, letter))
    }

    /// Write `word` along `path`
    ///
    /// Callers validate with [`LetterGrid::can_write`] first.
    pub fn write(&mut self, word: &[char], path: &PlacementPath) {
        for (&position, &letter) in path.positions().iter().zip(word) {
            self.set(position, letter);
        }
    }

    /// Read the letters along a sequence of positions
    ///
    /// Returns `None` if any position is empty or out of bounds.
    pub fn read(&self, positions: &[Position]) -> Option<String> {
        positions.iter().map(|&position| self.get(position)).collect()
    }

    /// In-bounds orthogonal neighbours in up, down, left, right order
    pub fn neighbors(&self, position: Position) -> Vec<Position> {
        orthogonal_neighbors(position, self.rows(), self.cols())
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols();
        (0..self.area()).map(move |i| [i / cols, i % cols])
    }

    /// Positions that are still empty, row-major
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.is_empty_at(p)).collect()
    }

    /// Test if every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Row-major letters with `' '` for empty cells
    pub fn letters(&self) -> Vec<Vec<char>> {
        self.cells
            .outer_iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(' ')).collect())
            .collect()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.outer_iter() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// In-bounds orthogonal neighbours of a position
pub fn orthogonal_neighbors(position: Position, rows: usize, cols: usize) -> Vec<Position> {
    ORTHOGONAL_OFFSETS
        .iter()
        .filter_map(|&[dr, dc]| {
            let row = position[0].checked_add_signed(dr)?;
            let col = position[1].checked_add_signed(dc)?;
            (row < rows && col < cols).then_some([row, col])
        })
        .collect()
}

/// Test if two positions share an edge
pub const fn are_adjacent(a: Position, b: Position) -> bool {
    a[0].abs_diff(b[0]) + a[1].abs_diff(b[1]) == 1
}
