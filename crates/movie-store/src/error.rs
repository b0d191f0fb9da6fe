//! Error types for the movie-store crate.
//!
//! Only seed loading can fail. The store operations themselves are total:
//! an unknown id is reported as `None` or as an empty removal, never as an error.

use thiserror::Error;

/// Errors that can occur while loading a seed fixture
#[derive(Error, Debug)]
pub enum StoreError {
    /// Seed file could not be found
    #[error("Failed to open seed file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file contents are not a valid movie fixture
    #[error("Parse error in {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
