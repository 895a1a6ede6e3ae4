//! Tool configuration loaded from environment variables.
//!
//! Loaded with a `__` separator, so `SEARCH__API_KEY` maps to
//! `search.api_key`. The RAG connection settings themselves are *not* here:
//! the retrieval adapter re-reads its `RAG_SERVER_*` variables on every
//! call (see `rag-client`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Configuration for the builtin tool set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    /// RAG query tool.
    #[serde(default)]
    pub rag: RagToolConfig,

    /// Crawl tool.
    #[serde(default)]
    pub crawl: CrawlToolConfig,

    /// Web search tool.
    #[serde(default)]
    pub search: SearchToolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagToolConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrawlToolConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchToolConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Tavily API key. The tool is skipped at registry build time when
    /// this is absent.
    pub api_key: Option<String>,

    #[serde(default = "default_search_results")]
    pub max_results: usize,

    /// Per-request timeout.
    #[serde(default = "default_search_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for RagToolConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for CrawlToolConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for SearchToolConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            api_key: None,
            max_results: default_search_results(),
            timeout: default_search_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_search_results() -> usize {
    5
}

fn default_search_timeout() -> Duration {
    Duration::from_secs(30)
}

impl ToolsConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep strings as strings; humantime handles durations.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build tools configuration")?;

        config
            .try_deserialize()
            .context("Failed to parse tools configuration")
    }
}
