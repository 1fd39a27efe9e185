//! Spatial data structures for the puzzle surface
//!
//! This module contains:
//! - The letter grid and orthogonal adjacency
//! - Placement paths and their shape metrics

/// Letter grid storage and neighbourhoods
pub mod grid;
/// Ordered cell sequences that spell words
pub mod path;

pub use grid::{LetterGrid, Position};
pub use path::PlacementPath;
