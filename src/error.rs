//! Error types for podcast-dl
//!
//! Run-level failures (fetching or parsing the feed, validating the feed
//! selection) abort the whole run; everything that can go wrong inside a single
//! download task is caught there and reported without touching sibling tasks.

use thiserror::Error;

/// Result type alias for podcast-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for podcast-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Network or transport error from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Feed body is not well-formed RSS
    #[error("feed parse error: {0}")]
    Parse(#[from] rss::Error),

    /// I/O error creating or writing a local file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized feed selection key
    #[error("invalid feed option '{0}': choose 'doctor' or 'cozy'")]
    InvalidFeed(String),
}
