//! Busy spinner and batch progress for interactive generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Shows a spinner while a board is generated and a bar across a batch
///
/// The batch bar only appears when more than one board is requested.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    spinner: Option<ProgressBar>,
    board_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Boards: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            spinner: None,
            board_count: 0,
        }
    }

    /// Prepare the display for `board_count` boards
    pub fn initialize(&mut self, board_count: usize) {
        self.board_count = board_count;

        if board_count > 1 {
            let batch_bar = ProgressBar::new(board_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Show the busy spinner for a new board
    pub fn start_board(&mut self, index: usize, seed: u64) {
        self.clear_spinner();

        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(format!(
            "Generating board {}/{} (seed {seed})",
            index + 1,
            self.board_count.max(1)
        ));
        self.spinner = Some(spinner);
    }

    /// Advance the spinner while the worker is busy
    pub fn tick(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.tick();
        }
    }

    /// Mark the current board as generated
    pub fn complete_board(&mut self, words: usize, elapsed: Duration) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!(
                "✓ {words} words in {:.2}s",
                elapsed.as_secs_f64()
            ));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Mark the current board as failed
    pub fn fail_board(&mut self, reason: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon_with_message(format!("✗ {reason}"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.clear_spinner();
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All boards processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
