//! Error types for PokeAPI lookups.

use thiserror::Error;

/// Errors that can occur while fetching a pokemon.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("Unexpected HTTP status {status} for {name}")]
    Status { status: u16, name: String },

    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, timeout, or body read failure.
    Transport,
    /// The server answered with a non-success status.
    HttpStatus,
    /// The body was not the expected JSON shape.
    MalformedPayload,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Transport,
            FetchError::NotFound(_) | FetchError::Status { .. } => FetchErrorKind::HttpStatus,
            FetchError::Decode(_) => FetchErrorKind::MalformedPayload,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
