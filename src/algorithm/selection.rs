use std::collections::HashSet;
use std::fmt;

use crate::algorithm::random::RandomSelector;
use crate::lexicon::{TargetDistribution, VocabularyIndex};

/// Selector could not reach the requested number of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionShortfall {
    /// Number of words asked for
    pub requested: usize,
    /// Number of words actually drawn
    pub selected: usize,
}

impl fmt::Display for SelectionShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "selected {} of {} requested words",
            self.selected, self.requested
        )
    }
}

/// Unique words drawn for one generation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    words: Vec<String>,
    requested: usize,
}

impl Selection {
    /// Selected words in draw order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the selection and return its words
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of selected words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Test if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words that were asked for
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Report a shortfall when fewer words than requested were drawn
    pub fn shortfall(&self) -> Option<SelectionShortfall> {
        (self.words.len() < self.requested).then_some(SelectionShortfall {
            requested: self.requested,
            selected: self.words.len(),
        })
    }

    /// Words ordered longest first; equal lengths keep draw order
    pub fn longest_first(&self) -> Vec<String> {
        let mut ordered = self.words.clone();
        ordered.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        ordered
    }
}

/// Draw target words matching a length distribution
///
/// Each length contributes up to its requested count, drawn without
/// replacement. A short result is backfilled from unused words of any length
/// in random order; an oversized one is sampled down to `target_count`. The
/// draw is repeated up to `max_attempts` times and the result closest to
/// `target_count` is kept. Never fails: a short selection is a valid result
/// reported through [`Selection::shortfall`].
pub fn select_words(
    index: &VocabularyIndex,
    distribution: &TargetDistribution,
    target_count: usize,
    max_attempts: usize,
    random: &mut RandomSelector,
) -> Selection {
    select_words_within(
        index,
        distribution,
        target_count,
        max_attempts,
        usize::MAX,
        random,
    )
}

/// Draw target words no longer than `max_length` letters
///
/// Same as [`select_words`], except that lengths above the ceiling are never
/// drawn, neither for the distribution nor for the backfill. The generator
/// passes the grid area so that no selected word is unplaceable by size.
pub fn select_words_within(
    index: &VocabularyIndex,
    distribution: &TargetDistribution,
    target_count: usize,
    max_attempts: usize,
    max_length: usize,
    random: &mut RandomSelector,
) -> Selection {
    let mut best: Option<Vec<String>> = None;

    for _ in 0..max_attempts.max(1) {
        let words = draw_once(index, distribution, target_count, max_length, random);
        let distance = target_count.abs_diff(words.len());
        let improves = best
            .as_ref()
            .is_none_or(|current| distance < target_count.abs_diff(current.len()));
        if improves {
            best = Some(words);
        }
        if distance == 0 {
            break;
        }
    }

    let words = best.unwrap_or_default();
    Selection {
        words,
        requested: target_count,
    }
}

fn draw_once(
    index: &VocabularyIndex,
    distribution: &TargetDistribution,
    target_count: usize,
    max_length: usize,
    random: &mut RandomSelector,
) -> Vec<String> {
    let mut chosen: Vec<String> = Vec::with_capacity(target_count);
    let mut used: HashSet<&str> = HashSet::new();

    for (length, count) in distribution.longest_first() {
        if length > max_length {
            log::debug!("Skipping {count} words with {length} letters, above {max_length}");
            continue;
        }
        let mut pool: Vec<&String> = index.words_of_length(length).iter().collect();
        random.shuffle(&mut pool);
        let mut added = 0;
        for word in pool {
            if added == count {
                break;
            }
            if used.insert(word.as_str()) {
                chosen.push(word.clone());
                added += 1;
            }
        }
        if added < count {
            log::debug!("Only {added} of {count} words with {length} letters available");
        }
    }

    if chosen.len() < target_count {
        let mut remaining: Vec<&String> = index
            .iter()
            .filter(|w| !used.contains(w.as_str()) && w.chars().count() <= max_length)
            .collect();
        random.shuffle(&mut remaining);
        let needed = target_count - chosen.len();
        chosen.extend(remaining.into_iter().take(needed).cloned());
    } else if chosen.len() > target_count {
        random.shuffle(&mut chosen);
        chosen.truncate(target_count);
    }

    chosen
}
