//! Vocabulary loading and word length configuration

/// Word list loading and the length-indexed vocabulary
pub mod bank;
/// Requested word count per length
pub mod distribution;

pub use bank::VocabularyIndex;
pub use distribution::TargetDistribution;
