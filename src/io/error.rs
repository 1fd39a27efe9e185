//! Error types for vocabulary loading, configuration and board generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Word list could not be opened or read
    WordSourceLoad {
        /// Path to the word list
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Word source produced no usable words after normalization
    ///
    /// Words shorter than two characters and blank lines are discarded, so a
    /// file made only of those ends up here too.
    EmptyVocabulary {
        /// Human readable description of the source
        origin: String,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Every selection and board attempt was exhausted without a board
    GenerationFailed {
        /// Word selections drawn before giving up
        generation_attempts: usize,
        /// Board attempt cap applied to each selection
        board_attempts: usize,
        /// Number of words the caller asked for
        requested: usize,
    },

    /// Background worker stopped without reporting an outcome
    WorkerDisconnected,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Board report could not be encoded
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordSourceLoad { path, source } => {
                write!(f, "Failed to load word list '{}': {source}", path.display())
            }
            Self::EmptyVocabulary { origin } => {
                write!(f, "No usable words found in {origin}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GenerationFailed {
                generation_attempts,
                board_attempts,
                requested,
            } => {
                write!(
                    f,
                    "Could not build a board with {requested} words after {generation_attempts} word selections ({board_attempts} boards each)"
                )
            }
            Self::WorkerDisconnected => {
                write!(f, "Generation worker stopped before reporting a board")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to encode board report: {source}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordSourceLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl GenerationError {
    /// Whether the error means no vocabulary could be loaded
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::WordSourceLoad { .. } | Self::EmptyVocabulary { .. }
        )
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
