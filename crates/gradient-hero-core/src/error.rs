//! Error types for Gradient Hero

use thiserror::Error;

/// Main error type for Gradient Hero operations
#[derive(Error, Debug)]
pub enum HeroError {
    /// Configuration value out of range or malformed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Email rejected by the waitlist guard
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// The waitlist service refused or failed the submission
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Transport error talking to the waitlist service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using HeroError
pub type HeroResult<T> = Result<T, HeroError>;
