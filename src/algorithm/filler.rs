use std::collections::BTreeMap;

use crate::algorithm::board::PlacedWord;
use crate::algorithm::random::RandomSelector;
use crate::io::configuration::{
    COMMON_LETTER_WEIGHT, COMMON_LETTERS, PLACED_LETTER_WEIGHT, VOWEL_WEIGHT, VOWELS,
};
use crate::spatial::LetterGrid;

/// Builds the weighted letter pool used for decoy cells
pub trait DecoyFiller {
    /// Letters and their draw weights for a board with these placed words
    fn letter_weights(&self, placed: &[PlacedWord]) -> Vec<(char, f64)>;
}

/// Favours letters from the hidden words so decoys look plausible
///
/// Each distinct letter of a placed word gets `placed_weight`, vowels get
/// `vowel_weight` and the static common table contributes `common_weight`.
/// Weights of the same letter add up.
#[derive(Debug, Clone, Copy)]
pub struct WeightedDecoyFiller {
    /// Weight of each letter appearing in a placed word
    pub placed_weight: f64,
    /// Extra weight of each vowel
    pub vowel_weight: f64,
    /// Weight of each letter of the common table
    pub common_weight: f64,
}

impl Default for WeightedDecoyFiller {
    fn default() -> Self {
        Self {
            placed_weight: PLACED_LETTER_WEIGHT,
            vowel_weight: VOWEL_WEIGHT,
            common_weight: COMMON_LETTER_WEIGHT,
        }
    }
}

impl DecoyFiller for WeightedDecoyFiller {
    fn letter_weights(&self, placed: &[PlacedWord]) -> Vec<(char, f64)> {
        // Ordered map keeps seeded fills reproducible
        let mut pool: BTreeMap<char, f64> = BTreeMap::new();

        let mut placed_letters: Vec<char> = placed.iter().flat_map(|p| p.word.chars()).collect();
        placed_letters.sort_unstable();
        placed_letters.dedup();
        for letter in placed_letters {
            *pool.entry(letter).or_insert(0.0) += self.placed_weight;
        }
        for letter in VOWELS.chars() {
            *pool.entry(letter).or_insert(0.0) += self.vowel_weight;
        }
        for letter in COMMON_LETTERS.chars() {
            *pool.entry(letter).or_insert(0.0) += self.common_weight;
        }

        pool.into_iter().filter(|(_, w)| *w > 0.0).collect()
    }
}

/// Fill every empty cell with a decoy letter
///
/// Letters are drawn from the filler's weighted pool; an empty or
/// zero-weight pool falls back to a uniform draw from [`COMMON_LETTERS`].
/// Returns the number of cells filled.
pub fn fill_empty_cells<F: DecoyFiller + ?Sized>(
    grid: &mut LetterGrid,
    filler: &F,
    placed: &[PlacedWord],
    random: &mut RandomSelector,
) -> usize {
    let pool = filler.letter_weights(placed);
    let weights: Vec<f64> = pool.iter().map(|(_, w)| *w).collect();
    let fallback: Vec<char> = COMMON_LETTERS.chars().collect();

    let empty = grid.empty_positions();
    for &position in &empty {
        let letter = random
            .weighted_choice(&weights)
            .and_then(|i| pool.get(i).map(|(letter, _)| *letter))
            .or_else(|| random.choose(&fallback).copied());
        if let Some(letter) = letter {
            grid.set(position, letter);
        }
    }
    empty.len()
}
