//! Error types for adresse-search

use thiserror::Error;

/// Main error type for adresse-search operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or non-2xx response from the address API
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// Response body was not the expected GeoJSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Query rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Transport error without an HTTP status (connection refused, DNS, ...)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

/// Result type alias for adresse-search operations
pub type Result<T> = std::result::Result<T, Error>;
