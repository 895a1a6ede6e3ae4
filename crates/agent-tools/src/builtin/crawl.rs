//! Crawl tool: fetch a URL and return readable markdown content.

use crate::error::ToolError;
use crate::types::{Tool, ToolDefinition};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;
use web_crawler::{Crawler, HttpCrawler};

/// The crawled markdown is truncated to this many characters before being
/// handed back to the model.
const MAX_CONTENT_CHARS: usize = 1000;

/// Tool wrapper around the web crawler.
pub struct CrawlTool {
    crawler: HttpCrawler,
}

#[derive(Deserialize)]
struct CrawlArgs {
    url: String,
}

impl CrawlTool {
    pub fn new() -> Self {
        Self {
            crawler: HttpCrawler::new(),
        }
    }

    /// Crawl one URL; failures come back as an in-band string.
    pub async fn crawl(&self, url: &str) -> String {
        match self.crawler.crawl(url).await {
            Ok(article) => {
                let content: String = article.to_markdown().chars().take(MAX_CONTENT_CHARS).collect();
                serde_json::json!({
                    "url": url,
                    "crawled_content": content,
                })
                .to_string()
            }
            Err(e) => {
                let msg = format!("Failed to crawl. Error: {}", e);
                error!("{}", msg);
                msg
            }
        }
    }
}

impl Default for CrawlTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CrawlTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(
            "crawl",
            "Crawl a url and get its readable content in markdown format.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The url to crawl."
                    }
                },
                "required": ["url"]
            }),
        )
    }

    fn name(&self) -> &str {
        "crawl"
    }

    async fn execute(&self, arguments: &str) -> Result<String, ToolError> {
        let args: CrawlArgs = serde_json::from_str(arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        Ok(self.crawl(&args.url).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn crawl_returns_url_and_truncated_content() {
        let mock_server = MockServer::start().await;

        // Long enough that the markdown exceeds the truncation limit.
        let paragraph = "word ".repeat(400);
        let html = format!(
            "<html><head><title>Long Page</title></head><body><p>{}</p></body></html>",
            paragraph
        );
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
            .mount(&mock_server)
            .await;

        let url = mock_server.uri();
        let result = CrawlTool::new()
            .execute(&serde_json::json!({ "url": url }).to_string())
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["url"], url.as_str());
        let content = value["crawled_content"].as_str().unwrap();
        assert!(content.starts_with("# Long Page"));
        assert_eq!(content.chars().count(), 1000);
    }

    #[tokio::test]
    async fn crawl_failure_is_an_in_band_string() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = CrawlTool::new().crawl(&mock_server.uri()).await;
        assert!(result.starts_with("Failed to crawl. Error:"));
        assert!(result.contains("503"));
    }

    #[tokio::test]
    async fn malformed_arguments_are_rejected() {
        let result = CrawlTool::new().execute(r#"{"link": "x"}"#).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
