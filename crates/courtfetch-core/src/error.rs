//! Unified error types for courtfetch

use thiserror::Error;

/// Unified error type for all courtfetch operations
#[derive(Error, Debug)]
pub enum CourtFetchError {
    // Session errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Form control not found: {0}")]
    ControlNotFound(String),

    /// Recoverable: the search form shows a challenge control and no
    /// challenge code was supplied. The caller re-prompts and retries.
    #[error("Challenge verification required")]
    ChallengeRequired,

    // Document-fetch errors
    #[error("Document fetch failed: {0}")]
    Fetch(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using CourtFetchError
pub type Result<T> = std::result::Result<T, CourtFetchError>;
