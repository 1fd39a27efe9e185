//! Requested number of words per word length

use crate::io::error::{GenerationError, Result, invalid_parameter};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Mapping from word length to the number of words wanted at that length
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetDistribution {
    counts: BTreeMap<usize, usize>,
}

impl TargetDistribution {
    /// Build a distribution from `(length, count)` pairs
    ///
    /// Repeated lengths accumulate and zero counts are dropped.
    pub fn new(pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut counts = BTreeMap::new();
        for (length, count) in pairs {
            if count > 0 {
                *counts.entry(length).or_insert(0) += count;
            }
        }
        Self { counts }
    }

    /// Pairs ordered longest length first
    ///
    /// Long words are the hardest to place, so selection handles them first.
    pub fn longest_first(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&length, &count)| (length, count))
    }

    /// Requested count for one length
    pub fn count_for(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Sum of all requested counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Test if nothing is requested
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromStr for TargetDistribution {
    type Err = GenerationError;

    /// Parse `length:count` pairs separated by commas, e.g. `9:1,6:2`
    fn from_str(s: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((length, count)) = entry.split_once(':') else {
                return Err(invalid_parameter(
                    "distribution",
                    &entry,
                    &"expected length:count",
                ));
            };
            let length: usize = length
                .trim()
                .parse()
                .map_err(|e| invalid_parameter("distribution", &entry, &e))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|e| invalid_parameter("distribution", &entry, &e))?;
            if length < 2 {
                return Err(invalid_parameter(
                    "distribution",
                    &entry,
                    &"word length must be at least 2",
                ));
            }
            pairs.push((length, count));
        }

        let distribution = Self::new(pairs);
        if distribution.is_empty() {
            return Err(invalid_parameter(
                "distribution",
                &s,
                &"at least one non-zero count is required",
            ));
        }
        Ok(distribution)
    }
}

impl fmt::Display for TargetDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .longest_first()
            .map(|(length, count)| format!("{length}:{count}"))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}
