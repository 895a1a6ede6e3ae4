//! Connection configuration for the RAG server.
//!
//! The tool wrapper resolves this from the process environment on every
//! call, so a redeployed backend is picked up without a restart. Tests and
//! embedders construct the struct directly instead of mutating process-wide
//! environment state.

use crate::error::RagError;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

/// Environment variable holding the RAG server endpoint URL.
pub const ENV_ENDPOINT: &str = "RAG_SERVER_URL";
/// Environment variable holding the bearer token.
pub const ENV_AUTH_TOKEN: &str = "RAG_SERVER_AUTH_TOKEN";
/// Environment variable holding the model identifier.
pub const ENV_MODEL: &str = "RAG_SERVER_MODEL";
/// Environment variable holding the request timeout in seconds (float).
pub const ENV_TIMEOUT: &str = "RAG_SERVER_TIMEOUT";

const DEFAULT_MODEL: &str = "model";
const DEFAULT_TIMEOUT_SECS: f64 = 60.0;

/// Connection settings for one RAG query.
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Chat-completion style endpoint URL.
    pub endpoint: String,
    /// Bearer token sent in the `Authorization` header.
    pub credential: SecretString,
    /// Model identifier sent in the payload.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RagConfig {
    /// Create a config with the default model and timeout.
    pub fn new(endpoint: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: SecretString::new(credential.into()),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Nothing is cached between calls. Missing endpoint or credential is a
    /// `Config` error, as is an unparsable or non-positive timeout.
    pub fn from_env() -> Result<Self, RagError> {
        let endpoint = env::var(ENV_ENDPOINT).unwrap_or_default();
        let credential = env::var(ENV_AUTH_TOKEN).unwrap_or_default();
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs = match env::var(ENV_TIMEOUT) {
            Ok(raw) => raw.parse::<f64>().map_err(|_| {
                RagError::Config(format!("{} is not a number: {:?}", ENV_TIMEOUT, raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
            return Err(RagError::Config(format!(
                "{} must be a positive number of seconds, got {}",
                ENV_TIMEOUT, timeout_secs
            )));
        }

        let config = Self {
            endpoint,
            credential: SecretString::new(credential),
            model,
            timeout: Duration::from_secs_f64(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty endpoint or credential before any network I/O.
    pub fn validate(&self) -> Result<(), RagError> {
        if self.endpoint.is_empty() || self.credential.expose_secret().is_empty() {
            return Err(RagError::Config(format!(
                "{} and {} must both be set",
                ENV_ENDPOINT, ENV_AUTH_TOKEN
            )));
        }
        Ok(())
    }
}
