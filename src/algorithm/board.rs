use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::spatial::grid::are_adjacent;
use crate::spatial::{LetterGrid, PlacementPath, Position};

/// A word committed to the grid together with its path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// Uppercase word as it reads along the path
    pub word: String,
    /// Cells spelling the word
    pub path: PlacementPath,
}

impl PlacedWord {
    /// Pair a word with its path
    pub fn new(word: impl Into<String>, path: PlacementPath) -> Self {
        Self {
            word: word.into(),
            path,
        }
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Test if the word has no letters
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Completed puzzle: a fully lettered grid and the words hidden in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: LetterGrid,
    placed: Vec<PlacedWord>,
    requested: usize,
}

impl Board {
    /// Assemble a board from a filled grid
    pub const fn new(grid: LetterGrid, placed: Vec<PlacedWord>, requested: usize) -> Self {
        Self {
            grid,
            placed,
            requested,
        }
    }

    /// Access the letter grid
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Row-major letters of the grid
    pub fn letters(&self) -> Vec<Vec<char>> {
        self.grid.letters()
    }

    /// Words hidden in the grid with their paths, longest first
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words hidden in the grid, longest first
    pub fn words(&self) -> Vec<&str> {
        self.placed.iter().map(|p| p.word.as_str()).collect()
    }

    /// Number of words the caller asked for
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Missing words when the board was built in best-effort mode
    pub const fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.placed.len())
    }

    /// Read the word spelled by a player selection
    ///
    /// The selection must stay inside the grid, step between orthogonal
    /// neighbours and never revisit a cell; otherwise `None` is returned.
    pub fn trace(&self, selection: &[Position]) -> Option<String> {
        if selection.is_empty() {
            return None;
        }
        let adjacent = selection
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if are_adjacent(*a, *b)));
        let mut seen = HashSet::with_capacity(selection.len());
        let unique = selection.iter().all(|p| seen.insert(*p));
        if !adjacent || !unique {
            return None;
        }
        self.grid.read(selection)
    }

    /// Return the hidden word a player selection spells, if any
    ///
    /// Any valid path spelling a hidden word counts, not only the path the
    /// generator used.
    pub fn check_selection(&self, selection: &[Position]) -> Option<&PlacedWord> {
        let spelled = self.trace(selection)?;
        self.placed.iter().find(|p| p.word == spelled)
    }

    /// Check that every placed path is valid and spells its word
    pub fn is_consistent(&self) -> bool {
        self.placed.iter().all(|placed| {
            placed.path.is_valid()
                && placed.path.spell(&self.grid).as_deref() == Some(placed.word.as_str())
        })
    }
}
