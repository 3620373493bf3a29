//! Error types for the taxateur directory scraper
//!
//! Provides one error enum covering transport, parsing, user input
//! and export failures, with human-readable messages.

use thiserror::Error;

/// Error type for all taxateur scraper operations
#[derive(Error, Debug)]
pub enum TaxateurError {
    /// HTTP transport failed (connection, timeout, invalid body)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status; carries the reason phrase
    #[error("Server rejected request: {0}")]
    StatusError(String),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Category selection input was not numeric or out of range
    #[error("Invalid selection: {0}")]
    SelectionError(String),

    /// CSV serialization failed
    #[error("CSV export failed: {0}")]
    CsvError(#[from] csv::Error),

    /// Writing the export file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for taxateur scraper operations
pub type Result<T> = std::result::Result<T, TaxateurError>;
