//! Web search tool backed by the Tavily API.

use crate::error::ToolError;
use crate::types::{Tool, ToolDefinition};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Web search tool using the Tavily API.
pub struct WebSearchTool {
    client: Client,
    api_key: SecretString,
    max_results: usize,
    endpoint: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize, Serialize)]
struct TavilyResult {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}

impl WebSearchTool {
    /// Create a web search tool with a Tavily API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::new(api_key.into()),
            max_results: 5,
            endpoint: TAVILY_ENDPOINT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the maximum number of results to return.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the search endpoint (self-hosted gateways, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn search(&self, query: &str) -> Result<String, ToolError> {
        debug!(query = %query, max_results = self.max_results, "Performing web search");

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&TavilyRequest {
                api_key: self.api_key.expose_secret().as_str(),
                query,
                max_results: self.max_results,
            })
            .send()
            .await?;

        if response.status() == 429 {
            return Err(ToolError::RateLimit);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::ExternalService(format!(
                "Tavily API error: {} - {}",
                status, body
            )));
        }

        let search_response: TavilyResponse = response.json().await?;
        if search_response.results.is_empty() {
            return Ok(format!("No results found for '{}'", query));
        }

        let results: Vec<TavilyResult> = search_response
            .results
            .into_iter()
            .take(self.max_results)
            .collect();
        Ok(serde_json::to_string(&results)?)
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(
            "web_search",
            "Search the web for current information. Use for news, facts, prices, \
             events, or anything that may have changed recently.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (e.g., 'latest news about AI')"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn name(&self) -> &str {
        "web_search"
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: SearchArgs = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let query = args.query.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidArguments("Empty query".into()));
        }

        match self.search(query).await {
            Ok(results) => Ok(results),
            Err(e) => {
                let msg = format!("Failed to search. Error: {}", e);
                error!("{}", msg);
                Ok(msg)
            }
        }
    }
}
