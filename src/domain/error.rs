//! Error types for the Stargazer plugin.
//!
//! [`StargazerError`] covers everything that can go wrong below the application
//! layer: talking to the search service, decoding its payload, loading themes
//! and parsing configuration. The application layer never shows these to the
//! user verbatim; a failed search collapses into a single generic message.

use thiserror::Error;

/// The main error type for Stargazer operations.
///
/// # Examples
///
/// ```
/// use stargazer::StargazerError;
///
/// let err = StargazerError::Http { status: 503 };
/// assert_eq!(err.to_string(), "search service returned HTTP 503");
/// ```
#[derive(Debug, Error)]
pub enum StargazerError {
    /// The search service answered with a non-success status code.
    #[error("search service returned HTTP {status}")]
    Http {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The response body was not the expected JSON collection.
    #[error("malformed search payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The request could not be sent or never completed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Stargazer operations.
pub type Result<T> = std::result::Result<T, StargazerError>;
