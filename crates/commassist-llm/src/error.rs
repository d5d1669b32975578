//! Error types for commassist-llm

use commassist_types::FormatError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for collaborator calls
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Completion contained no text")]
    EmptyCompletion,

    #[error("Malformed output: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// One-line description without the upstream response body.
    pub fn brief(&self) -> String {
        match self {
            Self::Api { status, .. } => format!("API error {status}"),
            Self::Http(e) if e.is_timeout() => "request timed out".to_string(),
            Self::Http(_) => "request failed".to_string(),
            Self::Serialization(_) => "unreadable response".to_string(),
            Self::EmptyCompletion => "empty completion".to_string(),
            Self::Format(_) => "malformed output".to_string(),
            Self::Config(_) => "client misconfigured".to_string(),
        }
    }

    /// True for failures worth another attempt (429 and 5xx).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
