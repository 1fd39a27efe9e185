use std::collections::HashSet;

use crate::algorithm::board::{Board, PlacedWord};
use crate::algorithm::filler::{DecoyFiller, WeightedDecoyFiller, fill_empty_cells};
use crate::algorithm::placer::{PlacementExhaustion, PlacementLimits, Placer};
use crate::algorithm::random::RandomSelector;
use crate::algorithm::scoring::{PathScorer, TurnCountScorer};
use crate::algorithm::selection::{Selection, select_words_within};
use crate::io::configuration::{
    ATTEMPTS_PER_WORD, CANDIDATE_PATHS_CONSIDERED, DEFAULT_COLS, DEFAULT_DISTRIBUTION,
    DEFAULT_ROWS, DEFAULT_TARGET_WORDS, MAX_GLOBAL_GENERATION_ATTEMPTS, MAX_GRID_DIMENSION,
    MAX_INTERNAL_BOARD_ATTEMPTS, MAX_REPLACEMENTS_PER_SLOT, SELECTION_ATTEMPTS,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::lexicon::{TargetDistribution, VocabularyIndex};
use crate::spatial::LetterGrid;

/// What to do when fewer words than requested can be used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationPolicy {
    /// Only boards with exactly the requested number of words succeed
    #[default]
    Strict,
    /// Accept short selections, and drop unplaceable slots on the last board
    /// attempt of a selection
    BestEffort,
}

/// Generation parameters: grid shape, word targets and retry caps
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Number of words hidden in the board
    pub target_count: usize,
    /// Requested words per length
    pub distribution: TargetDistribution,
    /// Start cells tried per word
    pub attempts_per_word: usize,
    /// Valid paths gathered before committing the most winding one
    pub candidate_paths: usize,
    /// Substitutes tried for a slot
    pub max_replacements: usize,
    /// Fresh boards tried per word selection
    pub board_attempts: usize,
    /// Word selections drawn before failing
    pub generation_attempts: usize,
    /// Draws the selector makes per selection
    pub selection_attempts: usize,
    /// Strict or best-effort handling of shortfalls
    pub policy: GenerationPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            target_count: DEFAULT_TARGET_WORDS,
            distribution: TargetDistribution::new(DEFAULT_DISTRIBUTION),
            attempts_per_word: ATTEMPTS_PER_WORD,
            candidate_paths: CANDIDATE_PATHS_CONSIDERED,
            max_replacements: MAX_REPLACEMENTS_PER_SLOT,
            board_attempts: MAX_INTERNAL_BOARD_ATTEMPTS,
            generation_attempts: MAX_GLOBAL_GENERATION_ATTEMPTS,
            selection_attempts: SELECTION_ATTEMPTS,
            policy: GenerationPolicy::Strict,
        }
    }
}

impl GeneratorConfig {
    /// Check that every dimension and retry cap is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let caps = [
            ("target_count", self.target_count),
            ("attempts_per_word", self.attempts_per_word),
            ("candidate_paths", self.candidate_paths),
            ("board_attempts", self.board_attempts),
            ("generation_attempts", self.generation_attempts),
            ("selection_attempts", self.selection_attempts),
        ];
        for (parameter, value) in caps {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        Ok(())
    }

    /// Per-word limits handed to the placer
    pub const fn placement_limits(&self) -> PlacementLimits {
        PlacementLimits {
            attempts_per_word: self.attempts_per_word,
            candidate_paths: self.candidate_paths,
            max_replacements: self.max_replacements,
        }
    }
}

/// Finite retry counter for one escalation tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptBudget {
    used: usize,
    cap: usize,
}

impl AttemptBudget {
    /// Create a budget allowing `cap` attempts
    pub const fn new(cap: usize) -> Self {
        Self { used: 0, cap }
    }

    /// Take one attempt, returning false once the cap is reached
    pub const fn try_consume(&mut self) -> bool {
        if self.used >= self.cap {
            return false;
        }
        self.used += 1;
        true
    }

    /// Attempts taken so far
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Attempts left
    pub const fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.used)
    }

    /// Test if no attempt is left
    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.cap
    }
}

/// States of the board generation machine
#[derive(Debug)]
pub enum GenerationState {
    /// Draw a fresh word selection
    SelectWords,
    /// Place the selection on fresh boards
    PlaceWords(Selection),
    /// All slots placed; decoys still missing
    FillEmpty {
        /// Grid holding only the placed words
        grid: LetterGrid,
        /// Committed words
        placed: Vec<PlacedWord>,
    },
    /// Completed board
    Success(Board),
    /// Every selection attempt exhausted
    Failure,
}

/// Counters describing the most recent generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Word selections drawn
    pub selections: usize,
    /// Boards started across all selections
    pub boards: usize,
    /// Selections that came back short
    pub shortfalls: usize,
    /// Slots dropped in best-effort mode
    pub dropped_slots: usize,
}

/// Builds word-search boards from a vocabulary
///
/// The scorer ranks candidate paths and the filler picks decoy letters; both
/// can be swapped for deterministic versions in tests.
pub struct BoardGenerator<'a, S = TurnCountScorer, F = WeightedDecoyFiller> {
    index: &'a VocabularyIndex,
    config: GeneratorConfig,
    random: RandomSelector,
    scorer: S,
    filler: F,
    /// Counters from the last call to [`BoardGenerator::generate`]
    pub stats: GenerationStats,
}

impl<'a> BoardGenerator<'a> {
    /// Create a generator with the default scorer and filler
    pub fn new(index: &'a VocabularyIndex, config: GeneratorConfig, seed: u64) -> Self {
        Self::with_strategies(
            index,
            config,
            RandomSelector::new(seed),
            TurnCountScorer,
            WeightedDecoyFiller::default(),
        )
    }
}

impl<'a, S: PathScorer, F: DecoyFiller> BoardGenerator<'a, S, F> {
    /// Create a generator with explicit strategies and random source
    pub fn with_strategies(
        index: &'a VocabularyIndex,
        config: GeneratorConfig,
        random: RandomSelector,
        scorer: S,
        filler: F,
    ) -> Self {
        Self {
            index,
            config,
            random,
            scorer,
            filler,
            stats: GenerationStats::default(),
        }
    }

    /// Replace the path scorer
    pub fn with_scorer<T: PathScorer>(self, scorer: T) -> BoardGenerator<'a, T, F> {
        BoardGenerator {
            index: self.index,
            config: self.config,
            random: self.random,
            scorer,
            filler: self.filler,
            stats: self.stats,
        }
    }

    /// Replace the decoy filler
    pub fn with_filler<G: DecoyFiller>(self, filler: G) -> BoardGenerator<'a, S, G> {
        BoardGenerator {
            index: self.index,
            config: self.config,
            random: self.random,
            scorer: self.scorer,
            filler,
            stats: self.stats,
        }
    }

    /// Access the configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the state machine until a board is built or every attempt is spent
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unusable configuration and
    /// `GenerationFailed` once every word selection is exhausted. No partial
    /// grid is ever returned.
    pub fn generate(&mut self) -> Result<Board> {
        self.config.validate()?;
        self.stats = GenerationStats::default();

        let mut selections = AttemptBudget::new(self.config.generation_attempts);
        let mut state = GenerationState::SelectWords;

        loop {
            state = match state {
                GenerationState::SelectWords => {
                    if selections.try_consume() {
                        self.stats.selections = selections.used();
                        self.select_step()
                    } else {
                        GenerationState::Failure
                    }
                }
                GenerationState::PlaceWords(selection) => {
                    match self.place_selection(&selection) {
                        Some((grid, placed)) => GenerationState::FillEmpty { grid, placed },
                        None => {
                            log::debug!(
                                "Board attempts exhausted for selection {}; drawing new words",
                                selections.used()
                            );
                            GenerationState::SelectWords
                        }
                    }
                }
                GenerationState::FillEmpty { mut grid, placed } => {
                    let filled =
                        fill_empty_cells(&mut grid, &self.filler, &placed, &mut self.random);
                    log::debug!("Filled {filled} decoy cells");
                    GenerationState::Success(Board::new(grid, placed, self.config.target_count))
                }
                GenerationState::Success(board) => {
                    log::info!(
                        "Generated board with {} words after {} selections and {} boards",
                        board.placed().len(),
                        self.stats.selections,
                        self.stats.boards
                    );
                    return Ok(board);
                }
                GenerationState::Failure => {
                    log::warn!(
                        "Board generation failed after {} selections",
                        selections.used()
                    );
                    return Err(GenerationError::GenerationFailed {
                        generation_attempts: selections.used(),
                        board_attempts: self.config.board_attempts,
                        requested: self.config.target_count,
                    });
                }
            };
        }
    }

    fn select_step(&mut self) -> GenerationState {
        let selection = select_words_within(
            self.index,
            &self.config.distribution,
            self.config.target_count,
            self.config.selection_attempts,
            self.config.rows.saturating_mul(self.config.cols),
            &mut self.random,
        );

        if let Some(shortfall) = selection.shortfall() {
            self.stats.shortfalls += 1;
            log::warn!("Word selection came back short: {shortfall}");
            if self.config.policy == GenerationPolicy::Strict || selection.is_empty() {
                return GenerationState::SelectWords;
            }
        }

        GenerationState::PlaceWords(selection)
    }

    /// Place a selection on fresh boards until one succeeds
    ///
    /// Each board attempt starts from an empty grid. Returns `None` once the
    /// board cap is exhausted.
    pub fn place_selection(
        &mut self,
        selection: &Selection,
    ) -> Option<(LetterGrid, Vec<PlacedWord>)> {
        let words = selection.longest_first();
        let mut boards = AttemptBudget::new(self.config.board_attempts);

        while boards.try_consume() {
            self.stats.boards += 1;
            let last_chance =
                self.config.policy == GenerationPolicy::BestEffort && boards.is_exhausted();
            match self.place_board(&words, last_chance) {
                Ok(result) => return Some(result),
                Err(exhaustion) => {
                    log::debug!("Board attempt {} discarded: {exhaustion}", boards.used());
                }
            }
        }
        None
    }

    /// Place every word on one fresh grid, longest first
    ///
    /// With `drop_exhausted` an unplaceable slot is skipped instead of failing
    /// the board, as long as at least one word lands.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlacementExhaustion`] that discards the board.
    pub fn place_board(
        &mut self,
        words: &[String],
        drop_exhausted: bool,
    ) -> std::result::Result<(LetterGrid, Vec<PlacedWord>), PlacementExhaustion> {
        let mut grid = LetterGrid::new(self.config.rows, self.config.cols);
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
        let mut reserved: HashSet<String> = words.iter().cloned().collect();
        let placer = Placer::new(self.config.placement_limits(), &self.scorer);
        let mut last_exhaustion = None;

        for word in words {
            match placer.place_slot(&mut grid, word, self.index, &reserved, &mut self.random) {
                Ok(committed) => {
                    reserved.insert(committed.word.clone());
                    placed.push(committed);
                }
                Err(exhaustion) if drop_exhausted => {
                    log::warn!("Dropping slot: {exhaustion}");
                    self.stats.dropped_slots += 1;
                    last_exhaustion = Some(exhaustion);
                }
                Err(exhaustion) => return Err(exhaustion),
            }
        }

        match last_exhaustion {
            Some(exhaustion) if placed.is_empty() => Err(exhaustion),
            _ => Ok((grid, placed)),
        }
    }
}

/// Build one board with the default strategies
///
/// # Errors
///
/// Same as [`BoardGenerator::generate`].
pub fn generate_board(
    index: &VocabularyIndex,
    config: GeneratorConfig,
    seed: u64,
) -> Result<Board> {
    BoardGenerator::new(index, config, seed).generate()
}
