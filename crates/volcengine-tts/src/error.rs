//! Volcengine TTS errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    /// HTTP transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the TTS endpoint.
    #[error("TTS endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered but reported a synthesis failure.
    #[error("TTS API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Audio payload was not valid base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}
