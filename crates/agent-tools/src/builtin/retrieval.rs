//! RAG query tool: retrieve answers from a deployed RAG server.

use crate::error::ToolError;
use crate::types::{Tool, ToolDefinition};
use async_trait::async_trait;
use rag_client::{RagClient, RagConfig, RagError, ENV_AUTH_TOKEN, ENV_ENDPOINT};
use serde::Deserialize;
use tracing::{error, info};

/// Tool wrapper around a chat-completion style RAG backend.
///
/// By default the connection settings are resolved from the `RAG_SERVER_*`
/// environment variables fresh on every call; nothing is cached between
/// invocations, and every call gets its own client and connection.
pub struct RagQueryTool {
    config: Option<RagConfig>,
}

#[derive(Deserialize)]
struct RagArgs {
    query: String,
}

impl RagQueryTool {
    /// Resolve connection settings from the environment on every call.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Use fixed connection settings instead of the process environment.
    pub fn with_config(config: RagConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn resolve_config(&self) -> Result<RagConfig, RagError> {
        match &self.config {
            Some(config) => {
                config.validate()?;
                Ok(config.clone())
            }
            None => RagConfig::from_env(),
        }
    }

    /// Send one query to the RAG server.
    ///
    /// Never fails: configuration errors, upstream HTTP errors and
    /// transport faults all come back as descriptive strings, because the
    /// invoking framework expects a textual tool result under all
    /// circumstances.
    pub async fn query(&self, query: &str) -> String {
        info!(query = %query, "RAG query");

        let config = match self.resolve_config() {
            Ok(config) => config,
            Err(e) => {
                let msg = format!(
                    "RAG server is not configured. Set {} and {}. ({})",
                    ENV_ENDPOINT, ENV_AUTH_TOKEN, e
                );
                error!("{}", msg);
                return msg;
            }
        };

        let result = match RagClient::new(config) {
            Ok(client) => client.query(query).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(answer) => {
                info!(answer = %answer, "RAG query answered");
                answer
            }
            Err(RagError::Api { status, body }) => {
                let msg = format!("RAG request failed. Status: {}, response: {}", status, body);
                error!("{}", msg);
                msg
            }
            Err(e) => {
                let msg = format!("RAG query failed. Error: {}", e);
                error!("{}", msg);
                msg
            }
        }
    }
}

impl Default for RagQueryTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for RagQueryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(
            "rag_query",
            "Retrieve information from the RAG (Retrieval-Augmented Generation) system. \
             Sends the query to the deployed RAG server and returns relevant information \
             from the knowledge base.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The query to send to the RAG system."
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn name(&self) -> &str {
        "rag_query"
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: RagArgs = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        Ok(self.query(&args.query).await)
    }
}
