//! Error types for linestatlib

use thiserror::Error;

/// Errors that can occur while reading stat records or writing the table
#[derive(Error, Debug)]
pub enum LinestatError {
    /// A record line had fewer than five whitespace-separated fields
    #[error("line {line}: expected 5 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    /// A record line had more than five whitespace-separated fields
    #[error("line {line}: expected 5 fields, found {found} (paths with spaces are not supported)")]
    ExtraFields { line: usize, found: usize },

    /// A numeric field was not a non-negative integer
    #[error("line {line}: invalid {field} '{value}': expected a non-negative integer")]
    InvalidCount {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
