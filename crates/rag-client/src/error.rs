//! Retrieval adapter errors.

use thiserror::Error;

/// Failure kinds for a RAG query.
///
/// Kept machine-distinguishable so the tool layer can render each kind as a
/// different in-band message.
#[derive(Error, Debug)]
pub enum RagError {
    /// Required configuration is missing or invalid. Detected before any
    /// network I/O happens.
    #[error("RAG server configuration error: {0}")]
    Config(String),

    /// Upstream returned a non-200 status.
    #[error("RAG server returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// HTTP transport failure, including timeout expiry.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
