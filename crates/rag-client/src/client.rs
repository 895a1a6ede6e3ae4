//! HTTP client for the RAG retrieval backend.

use crate::config::RagConfig;
use crate::error::RagError;
use crate::types::{RagRequest, RagResponse};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::debug;

/// One-shot client for a chat-completion style retrieval endpoint.
///
/// The tool layer builds a fresh instance (and therefore a fresh connection)
/// per query; nothing is shared between calls. The credential is held as a
/// `SecretString` so it never leaks through debug output.
pub struct RagClient {
    client: Client,
    config: RagConfig,
}

impl RagClient {
    /// Build a client from validated configuration.
    pub fn new(config: RagConfig) -> Result<Self, RagError> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Send one query and extract the answer text.
    ///
    /// Success requires status 200 exactly; the answer is
    /// `choices[0].message.content`, with any missing segment of that path
    /// mapped to an empty string. Any other status surfaces as
    /// [`RagError::Api`] carrying both the code and the raw body.
    pub async fn query(&self, query: &str) -> Result<String, RagError> {
        let request = RagRequest::single_turn(&self.config.model, query);

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "Sending RAG query"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.credential.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(RagError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: RagResponse = serde_json::from_str(&body)?;
        Ok(parsed.answer())
    }
}
