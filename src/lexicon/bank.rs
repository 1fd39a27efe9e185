//! Word bank loading and the length-indexed vocabulary

use crate::io::configuration::MIN_WORD_LENGTH;
use crate::io::error::{GenerationError, Result};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Vocabulary grouped by word length
///
/// Lengths are counted in characters, not bytes, so accented letters occupy a
/// single grid cell. Words keep their first-seen order which keeps seeded
/// generation reproducible.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    by_length: BTreeMap<usize, Vec<String>>,
    known: HashSet<String>,
}

impl VocabularyIndex {
    /// Load a word list with one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordSourceLoad` if the file cannot be opened or read and
    /// `EmptyVocabulary` if no line survives normalization.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GenerationError::WordSourceLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let mut words = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| GenerationError::WordSourceLoad {
                path: path.to_path_buf(),
                source,
            })?;
            words.push(line);
        }

        Self::build(words, &path.display().to_string())
    }

    /// Load words from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns `WordSourceLoad` on read failure and `EmptyVocabulary` if no
    /// usable word is found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| GenerationError::WordSourceLoad {
                path: "<reader>".into(),
                source,
            })?;
            words.push(line);
        }
        Self::build(words, "reader input")
    }

    /// Build an index from words already in memory
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if no usable word is found.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, "word list")
    }

    fn build<I, S>(words: I, origin: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            if let Some(normalized) = normalize(word.as_ref()) {
                index.insert(normalized);
            }
        }

        if index.is_empty() {
            return Err(GenerationError::EmptyVocabulary {
                origin: origin.to_string(),
            });
        }

        log::debug!(
            "Loaded {} words across {} lengths from {origin}",
            index.len(),
            index.by_length.len()
        );
        Ok(index)
    }

    fn insert(&mut self, word: String) {
        if self.known.contains(&word) {
            return;
        }
        let length = word.chars().count();
        self.known.insert(word.clone());
        self.by_length.entry(length).or_default().push(word);
    }

    /// Words of exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Lengths present in the index, shortest first
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }

    /// Every word, grouped by ascending length
    pub fn iter(&self) -> impl Iterator<Item = &String> + '_ {
        self.by_length.values().flatten()
    }

    /// Check whether an already normalized word is in the index
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    /// Total number of unique words
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Test if the index holds no words
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

/// Trim and uppercase a raw line, discarding words that are too short
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_uppercase();
    (word.chars().count() >= MIN_WORD_LENGTH).then_some(word)
}
