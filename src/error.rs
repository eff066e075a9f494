//! Error types module.
//!
//! This module defines the error types used throughout the iplens
//! application. It uses `thiserror` for structured error handling and
//! provides a custom `Result` type alias for convenience.

use thiserror::Error;

/// A specialized `Result` type for iplens operations.
///
/// This type is used throughout the crate to handle errors consistently.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the iplens application.
///
/// Each variant represents a different category of error that can occur
/// while serving the dashboard or talking to upstream services.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations, network sockets, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (target lists, upstream payloads)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error (request construction, transport failures)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error (invalid config, missing files)
    #[error("Config error: {0}")]
    Config(String),

    /// Parse error (invalid input format, malformed data)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream provider returned an unusable response
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Operation timeout
    #[error("Operation timed out")]
    Timeout,
}

impl Error {
    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new parse error with a message.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new upstream error with a message.
    #[must_use]
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
