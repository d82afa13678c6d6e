/*!
 * Error types for the bglex application.
 *
 * This module contains custom error types for different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a grapheme-to-phoneme backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error when the backend executable cannot be spawned
    #[error("Failed to spawn backend process: {0}")]
    SpawnFailed(String),

    /// Error when the backend exits with a non-zero status
    #[error("Backend exited with error: {0}")]
    ProcessFailed(String),

    /// Error when the backend output cannot be decoded
    #[error("Failed to decode backend output: {0}")]
    DecodeError(String),

    /// Error when the backend returns a result list of the wrong length
    #[error("Backend returned {got} results for {expected} inputs")]
    LengthMismatch {
        /// Number of results received
        got: usize,
        /// Number of inputs sent
        expected: usize,
    },

    /// Error establishing that the backend is available at all
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while reading a source table
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error when a source table file is missing
    #[error("Source table not found: {0}")]
    NotFound(String),

    /// Error when a source table cannot be read
    #[error("Failed to read source table: {0}")]
    ReadFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the phonemization backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error from source ingestion
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Both input sources are absent - there is nothing to merge
    #[error("No input sources available: {0}")]
    NoSources(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
