//! Error types for seoscore operations.
//!
//! The scorer itself is infallible: a deficient article is reported through a
//! low score and its recommendations. [`SeoError`] covers everything around
//! it, such as decoding article documents at the boundary, fetching pages and
//! reading files.
//!
//! # Example
//!
//! ```rust
//! use seoscore_core::{ArticleDocument, SeoError};
//!
//! match ArticleDocument::from_json(r#"{"sections": "not a list"}"#) {
//!     Ok(_) => unreachable!(),
//!     Err(SeoError::InvalidDocument(reason)) => println!("rejected: {}", reason),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seoscore operations.
#[derive(Error, Debug)]
pub enum SeoError {
    /// The article document does not match the expected shape.
    ///
    /// Returned when a list field holds a non-list value, a string field holds
    /// a number, or the input is not JSON at all. Missing fields and `null`
    /// values are not errors.
    #[error("Invalid article document: {0}")]
    InvalidDocument(String),

    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector or a failed rewrite.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The page contains nothing that could be imported as an article.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// A report could not be rendered as JSON.
    #[error("Failed to serialize output: {0}")]
    SerializeError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

impl From<serde_json::Error> for SeoError {
    fn from(err: serde_json::Error) -> Self {
        SeoError::InvalidDocument(err.to_string())
    }
}

/// Result type alias for SeoError.
pub type Result<T> = std::result::Result<T, SeoError>;
