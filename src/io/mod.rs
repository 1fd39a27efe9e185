/// Command-line arguments and the board batch driver
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types for loading, configuration and generation
pub mod error;
/// Spinner and batch progress display
pub mod progress;
/// Text and JSON board output
pub mod render;
