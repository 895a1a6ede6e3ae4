//! Tool execution errors.

use thiserror::Error;

/// Errors that can occur while running a tool.
///
/// Tool runtime failures are flattened into in-band result strings by the
/// individual wrappers; these variants cover argument-schema violations and
/// the internal plumbing the wrappers flatten from.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Invalid JSON arguments for a tool call.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool is missing required configuration (API key, etc.).
    #[error("Tool not configured: {0}")]
    NotConfigured(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON handling failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rate limit exceeded upstream.
    #[error("Rate limit exceeded")]
    RateLimit,

    /// External service returned an error.
    #[error("External service error: {0}")]
    ExternalService(String),
}
