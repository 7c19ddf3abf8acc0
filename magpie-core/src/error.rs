//! Error types for Magpie

use thiserror::Error;

/// Result type alias for Magpie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Magpie operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Anthropic API returned a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
