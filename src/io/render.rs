//! Text and JSON renderings of generated boards

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::board::{Board, PlacedWord};
use crate::io::error::{GenerationError, Result};

/// Serializable snapshot of a board for collaborators
///
/// Rows are stored as strings of letters; words carry the path the generator
/// used so a front end can highlight solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    /// Seed the board was generated from
    pub seed: u64,
    /// Number of words that were requested
    pub requested: usize,
    /// Grid rows, one string per row
    pub grid: Vec<String>,
    /// Hidden words with their paths
    pub words: Vec<PlacedWord>,
}

impl BoardReport {
    /// Snapshot a board
    pub fn from_board(board: &Board, seed: u64) -> Self {
        Self {
            seed,
            requested: board.requested(),
            grid: board
                .letters()
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
            words: board.placed().to_vec(),
        }
    }
}

/// Human readable board: the grid followed by the word list grouped by length
pub fn render_text(board: &Board, seed: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Seed {seed}");
    let _ = write!(out, "{}", board.grid());

    let mut current_length = None;
    for placed in board.placed() {
        let length = placed.word.chars().count();
        if current_length != Some(length) {
            let _ = write!(out, "\n{length} letters:");
            current_length = Some(length);
        }
        let _ = write!(out, " {}", placed.word);
    }
    out.push('\n');

    if board.shortfall() > 0 {
        let _ = writeln!(
            out,
            "Could not build a full puzzle: {} of {} words",
            board.placed().len(),
            board.requested()
        );
    }
    out
}

/// Encode reports as pretty JSON
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn to_json(reports: &[BoardReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Write rendered output to a file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
