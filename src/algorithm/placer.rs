use std::collections::HashSet;
use std::fmt;

use crate::algorithm::board::PlacedWord;
use crate::algorithm::pathfinder::find_path;
use crate::algorithm::random::RandomSelector;
use crate::algorithm::scoring::{PathScorer, best_candidate};
use crate::algorithm::visited::VisitedSet;
use crate::lexicon::VocabularyIndex;
use crate::spatial::{LetterGrid, PlacementPath};

/// Search limits for placing one word and for replacing it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementLimits {
    /// Start cells tried for a single word
    pub attempts_per_word: usize,
    /// Valid paths collected before the best one is committed
    pub candidate_paths: usize,
    /// Substitute words tried once the original word fails
    pub max_replacements: usize,
}

/// A slot whose word and every allowed substitute failed to place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementExhaustion {
    /// Word originally selected for the slot
    pub word: String,
    /// Words attempted, the original included
    pub tried: usize,
}

impl fmt::Display for PlacementExhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No placement for '{}' after trying {} words",
            self.word, self.tried
        )
    }
}

/// Commits words to a grid along winding adjacency paths
pub struct Placer<'s, S: PathScorer + ?Sized> {
    limits: PlacementLimits,
    scorer: &'s S,
}

impl<'s, S: PathScorer + ?Sized> Placer<'s, S> {
    /// Create a placer with the given limits and complexity heuristic
    pub const fn new(limits: PlacementLimits, scorer: &'s S) -> Self {
        Self { limits, scorer }
    }

    /// Access the search limits
    pub const fn limits(&self) -> PlacementLimits {
        self.limits
    }

    /// Try to place `word` and return the committed path
    ///
    /// Start cells that are empty or already hold the first letter are
    /// shuffled and searched one by one. Up to `candidate_paths` valid paths
    /// are gathered and the highest scoring one is written. The grid is left
    /// untouched when nothing fits, and a word longer than the grid has cells
    /// is rejected without searching.
    pub fn place(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        random: &mut RandomSelector,
    ) -> Option<PlacementPath> {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() > grid.area() {
            log::debug!(
                "'{word}' has {} letters but the grid only has {} cells",
                letters.len(),
                grid.area()
            );
            return None;
        }
        let &first = letters.first()?;

        let mut starts: Vec<_> = grid
            .positions()
            .filter(|&position| grid.accepts(position, first))
            .collect();
        random.shuffle(&mut starts);

        let wanted = self.limits.candidate_paths.max(1);
        let mut candidates = Vec::with_capacity(wanted);
        for start in starts.into_iter().take(self.limits.attempts_per_word) {
            let mut visited = VisitedSet::new(grid.rows(), grid.cols());
            if let Some(path) = find_path(grid, &letters, start, &mut visited, random) {
                candidates.push(path);
                if candidates.len() >= wanted {
                    break;
                }
            }
        }

        while let Some(index) = best_candidate(self.scorer, &candidates) {
            let path = candidates.swap_remove(index);
            // Earlier placements in this attempt may have claimed a cell
            if grid.can_write(&letters, &path) {
                grid.write(&letters, &path);
                return Some(path);
            }
        }
        None
    }

    /// Fill one slot, falling back to same-length substitutes
    ///
    /// `reserved` holds words that must not be used as substitutes, i.e. words
    /// already committed and words still waiting for their own slot.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementExhaustion`] when the word and every substitute
    /// tried within `max_replacements` fail to place.
    pub fn place_slot(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        index: &VocabularyIndex,
        reserved: &HashSet<String>,
        random: &mut RandomSelector,
    ) -> Result<PlacedWord, PlacementExhaustion> {
        if let Some(path) = self.place(grid, word, random) {
            return Ok(PlacedWord::new(word, path));
        }

        let length = word.chars().count();
        let mut tried: HashSet<&str> = HashSet::from([word]);

        for _ in 0..self.limits.max_replacements {
            let substitutes: Vec<&String> = index
                .words_of_length(length)
                .iter()
                .filter(|w| !reserved.contains(*w) && !tried.contains(w.as_str()))
                .collect();
            let Some(&substitute) = random.choose(&substitutes) else {
                break;
            };
            tried.insert(substitute.as_str());

            if let Some(path) = self.place(grid, substitute, random) {
                log::debug!("Replaced '{word}' with '{substitute}'");
                return Ok(PlacedWord::new(substitute, path));
            }
        }

        Err(PlacementExhaustion {
            word: word.to_string(),
            tried: tried.len(),
        })
    }
}
