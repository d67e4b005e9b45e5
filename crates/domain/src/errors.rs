//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SwipeDeck
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SwipeDeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SwipeDeck operations
pub type Result<T> = std::result::Result<T, SwipeDeckError>;

/// Failure of a single profile list fetch.
///
/// Causes are carried as rendered messages so the error can sit inside
/// [`crate::LoadState`] snapshots that are cloned out to observers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FetchError {
    /// The list endpoint could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network-layer failure (connect, timeout, non-success status)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Payload did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<FetchError> for SwipeDeckError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl(_) => Self::Config(err.to_string()),
            FetchError::Transport(_) | FetchError::Decode(_) => Self::Network(err.to_string()),
        }
    }
}
