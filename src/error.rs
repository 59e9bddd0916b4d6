//! Error types for postfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for postfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the formatting engine.
///
/// Formatting itself never fails; these errors come from the boundaries
/// (reading input, parsing selectors, exporting JSON).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The platform selector is not one of the supported platforms.
    #[error("Unknown platform: '{0}' (expected 'telegram' or 'linkedin')")]
    UnknownPlatform(String),

    /// The numbering selector is not recognized.
    #[error("Invalid numbering mode: '{0}' (expected 'carry-over' or 'per-paragraph')")]
    InvalidNumberingMode(String),

    /// Error during JSON serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),
}
