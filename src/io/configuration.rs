//! Generation constants and runtime configuration defaults

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 5;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 6;

/// Default number of words hidden in a board
pub const DEFAULT_TARGET_WORDS: usize = 7;

/// Default length distribution as `(length, count)` pairs
pub const DEFAULT_DISTRIBUTION: [(usize, usize); 5] = [(9, 1), (8, 1), (7, 1), (6, 2), (5, 2)];
/// Default length distribution in command-line form
pub const DEFAULT_DISTRIBUTION_SPEC: &str = "9:1,8:1,7:1,6:2,5:2";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Per-word search limits
/// Randomized start cells tried for a single word
pub const ATTEMPTS_PER_WORD: usize = 200;
/// Valid paths collected before the most winding one is committed
pub const CANDIDATE_PATHS_CONSIDERED: usize = 20;

// Retry ladders, innermost first
/// Substitute words tried for one slot before the slot is exhausted
pub const MAX_REPLACEMENTS_PER_SLOT: usize = 100;
/// Fresh boards tried for one word selection
pub const MAX_INTERNAL_BOARD_ATTEMPTS: usize = 20;
/// Word selections drawn before generation fails
///
/// Each selection gets its own board attempts, so a failed call costs at most
/// this many times `MAX_INTERNAL_BOARD_ATTEMPTS` boards.
pub const MAX_GLOBAL_GENERATION_ATTEMPTS: usize = 30;
/// Draws the selector makes while chasing the target count
pub const SELECTION_ATTEMPTS: usize = 5;

/// Words shorter than this are dropped while loading
pub const MIN_WORD_LENGTH: usize = 2;

// Decoy letter pool
/// Static fallback table, most common letters first
pub const COMMON_LETTERS: &str = "AEIOULNSTRDCMBPGVHFYQJZXKW";
/// Vowels favoured by the decoy pool
pub const VOWELS: &str = "AEIOU";
/// Weight of each letter that appears in a placed word
pub const PLACED_LETTER_WEIGHT: f64 = 3.0;
/// Extra weight of each vowel
pub const VOWEL_WEIGHT: f64 = 2.0;
/// Weight of each letter in the static table
pub const COMMON_LETTER_WEIGHT: f64 = 1.0;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
