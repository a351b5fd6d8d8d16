//! Error types for the chat core.

use thiserror::Error;

/// Result type alias for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur in the chat core.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Responder error: {0}")]
    Responder(String),

    #[error("Unknown law domain: {0}")]
    UnknownDomain(String),

    #[error("Domain not available yet: {0}")]
    DomainUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
