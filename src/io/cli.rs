//! Command-line interface for generating batches of word-search boards

use crate::algorithm::background::spawn_generation;
use crate::algorithm::board::Board;
use crate::algorithm::generator::{GenerationPolicy, GeneratorConfig};
use crate::io::configuration::{
    ATTEMPTS_PER_WORD, CANDIDATE_PATHS_CONSIDERED, DEFAULT_COLS, DEFAULT_DISTRIBUTION_SPEC,
    DEFAULT_ROWS, DEFAULT_TARGET_WORDS, MAX_GLOBAL_GENERATION_ATTEMPTS,
    MAX_INTERNAL_BOARD_ATTEMPTS, MAX_REPLACEMENTS_PER_SLOT, SELECTION_ATTEMPTS, SPINNER_TICK_MS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::{BoardReport, render_text, to_json, write_file};
use crate::lexicon::{TargetDistribution, VocabularyIndex};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "lexigrid")]
#[command(
    author,
    version,
    about = "Generate word-search boards with words hidden along winding paths"
)]
/// Command-line arguments for the board generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Word list, one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Random seed for reproducible boards (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of boards to generate, seeded consecutively
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of words hidden in each board
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WORDS)]
    pub target: usize,

    /// Words per length as `length:count` pairs
    #[arg(short, long, default_value = DEFAULT_DISTRIBUTION_SPEC)]
    pub distribution: TargetDistribution,

    /// Start cells tried per word
    #[arg(long, default_value_t = ATTEMPTS_PER_WORD)]
    pub attempts_per_word: usize,

    /// Valid paths gathered before the most winding one is kept
    #[arg(long, default_value_t = CANDIDATE_PATHS_CONSIDERED)]
    pub candidates: usize,

    /// Substitute words tried per slot
    #[arg(long, default_value_t = MAX_REPLACEMENTS_PER_SLOT)]
    pub replacements: usize,

    /// Fresh boards tried per word selection
    #[arg(long, default_value_t = MAX_INTERNAL_BOARD_ATTEMPTS)]
    pub board_attempts: usize,

    /// Word selections drawn before giving up
    #[arg(long, default_value_t = MAX_GLOBAL_GENERATION_ATTEMPTS)]
    pub generation_attempts: usize,

    /// Draws per selection while chasing the target word count
    #[arg(long, default_value_t = SELECTION_ATTEMPTS)]
    pub selection_attempts: usize,

    /// Accept boards with fewer words than requested
    #[arg(short, long)]
    pub best_effort: bool,

    /// Emit boards as JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generator configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any value fails validation.
    pub fn to_config(&self) -> Result<GeneratorConfig> {
        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be at least 1"));
        }

        let config = GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            target_count: self.target,
            distribution: self.distribution.clone(),
            attempts_per_word: self.attempts_per_word,
            candidate_paths: self.candidates,
            max_replacements: self.replacements,
            board_attempts: self.board_attempts,
            generation_attempts: self.generation_attempts,
            selection_attempts: self.selection_attempts,
            policy: if self.best_effort {
                GenerationPolicy::BestEffort
            } else {
                GenerationPolicy::Strict
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Seed of each board in the batch
    pub fn seeds(&self, base: u64) -> impl Iterator<Item = u64> {
        (0..self.count as u64).map(move |offset| base.wrapping_add(offset))
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BoardProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BoardProcessor {
    /// Create a new board processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate boards according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded, the arguments are
    /// invalid, a board cannot be generated or output cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.to_config()?;
        let index = Arc::new(VocabularyIndex::from_path(&self.cli.words)?);
        log::info!(
            "Loaded {} words from {}",
            index.len(),
            self.cli.words.display()
        );

        let base_seed = self.cli.seed.unwrap_or_else(rand::random);
        let seeds: Vec<u64> = self.cli.seeds(base_seed).collect();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut reports = Vec::with_capacity(seeds.len());
        let mut rendered = String::new();
        for (index_in_batch, &seed) in seeds.iter().enumerate() {
            let board = self.generate_one(&index, &config, index_in_batch, seed)?;
            if self.cli.json {
                reports.push(BoardReport::from_board(&board, seed));
            } else {
                if !rendered.is_empty() {
                    rendered.push('\n');
                }
                rendered.push_str(&render_text(&board, seed));
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.json {
            rendered = to_json(&reports)?;
            rendered.push('\n');
        }
        self.emit(&rendered)
    }

    fn generate_one(
        &mut self,
        index: &Arc<VocabularyIndex>,
        config: &GeneratorConfig,
        index_in_batch: usize,
        seed: u64,
    ) -> Result<Board> {
        let start_time = Instant::now();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_board(index_in_batch, seed);
        }

        let mut task = spawn_generation(Arc::clone(index), config.clone(), seed);
        let outcome = loop {
            if let Some(outcome) = task.try_outcome() {
                break outcome;
            }
            if let Some(ref pm) = self.progress_manager {
                pm.tick();
            }
            std::thread::sleep(Duration::from_millis(SPINNER_TICK_MS));
        };

        match outcome {
            Ok(board) => {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.complete_board(board.placed().len(), start_time.elapsed());
                }
                Ok(board)
            }
            Err(error) => {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_board(&error.to_string());
                    pm.finish();
                }
                Err(error)
            }
        }
    }

    // Allow print for delivering the generated boards
    #[allow(clippy::print_stdout)]
    fn emit(&self, rendered: &str) -> Result<()> {
        match self.cli.output {
            Some(ref path) => write_file(path, rendered),
            None => {
                print!("{rendered}");
                Ok(())
            }
        }
    }
}
