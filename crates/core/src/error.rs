//! Error types for readmetrics operations.
//!
//! This module defines the main error type [`MetricsError`] which represents
//! everything that can go wrong around the analysis engine: fetching pages,
//! parsing markup, reading lexicons and reading or writing the metrics table.
//!
//! The analysis functions themselves are total over their input and never
//! return an error.
//!
//! # Example
//!
//! ```rust
//! use readmetrics_core::{MetricsError, Result, read_input};
//!
//! fn count_inputs(path: &str) -> Result<usize> {
//!     match read_input(path) {
//!         Ok(records) => Ok(records.len()),
//!         Err(MetricsError::FileNotFound(_)) => Ok(0),
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the fetch, extract and store collaborators.
///
/// # Example
///
/// ```rust
/// use readmetrics_core::{MetricsError, fetch_file};
///
/// match fetch_file("/nonexistent/page.html") {
///     Ok(html) => println!("{} bytes", html.len()),
///     Err(MetricsError::FileNotFound(path)) => println!("missing: {}", path.display()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MetricsError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input or output table.
    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    /// Invalid glob pattern for lexicon files.
    #[error("Invalid lexicon pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Input table is missing required columns.
    #[error("Input table error: {0}")]
    InputError(String),
}

/// Result type alias for MetricsError.
///
/// This is a convenience alias for `std::result::Result<T, MetricsError>`.
pub type Result<T> = std::result::Result<T, MetricsError>;
