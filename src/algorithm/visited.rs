use bitvec::prelude::*;
use std::fmt;

use crate::spatial::Position;

/// Fixed-size set of grid cells visited by one path search
///
/// Cells are stored row-major, one bit each. Positions outside the grid are
/// never members.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create an empty set for a `rows × cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    const fn offset(&self, position: Position) -> Option<usize> {
        if position[1] >= self.cols {
            return None;
        }
        Some(position[0] * self.cols + position[1])
    }

    /// Mark a position as visited
    pub fn insert(&mut self, position: Position) {
        if let Some(offset) = self.offset(position)
            && offset < self.bits.len()
        {
            self.bits.set(offset, true);
        }
    }

    /// Unmark a position when the search backtracks
    pub fn remove(&mut self, position: Position) {
        if let Some(offset) = self.offset(position)
            && offset < self.bits.len()
        {
            self.bits.set(offset, false);
        }
    }

    /// Test position membership
    pub fn contains(&self, position: Position) -> bool {
        self.offset(position)
            .and_then(|offset| self.bits.get(offset).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no position is marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count marked positions
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Forget every mark
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({} cells)", self.count())
    }
}
