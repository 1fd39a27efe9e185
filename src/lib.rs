//! Word-search board generator that hides words along winding paths of orthogonally adjacent cells
//!
//! Target words are drawn from a vocabulary by length, placed longest first on a
//! fixed grid where crossing words share letters, and every remaining cell is
//! filled with weighted decoy letters. Retry ladders substitute words, restart
//! boards and redraw selections until a complete board is built or every
//! budget is spent.

#![forbid(unsafe_code)]

/// Path search, word placement, decoy filling and the generation state machine
pub mod algorithm;
/// Command-line interface, configuration, errors and output
pub mod io;
/// Vocabulary loading and word length distributions
pub mod lexicon;
/// Letter grid storage and placement paths
pub mod spatial;

pub use io::error::{GenerationError, Result};
