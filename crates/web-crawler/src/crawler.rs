//! Page fetching and readable-text extraction.

use crate::article::Article;
use crate::error::CrawlError;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Maximum response body size (5 MB).
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Tags whose entire subtree is ignored during extraction.
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Fetches a URL and extracts its readable content.
#[async_trait]
pub trait Crawler: Send + Sync {
    async fn crawl(&self, url: &str) -> Result<Article, CrawlError>;
}

/// Crawler backed by a plain HTTP GET.
///
/// HTML responses go through tag-stripping text extraction; anything else is
/// passed through as-is.
pub struct HttpCrawler {
    client: Client,
}

impl HttpCrawler {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpCrawler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Crawler for HttpCrawler {
    async fn crawl(&self, url: &str) -> Result<Article, CrawlError> {
        debug!(url = %url, "Crawling page");

        let response = self
            .client
            .get(url)
            .header("User-Agent", "agent-tools/0.1 (web-crawler)")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.bytes().await?;
        if body.len() > MAX_BODY_SIZE {
            return Err(CrawlError::TooLarge {
                size: body.len(),
                max: MAX_BODY_SIZE,
            });
        }
        let body = String::from_utf8_lossy(&body);

        let (title, text) =
            if content_type.contains("text/html") || content_type.contains("application/xhtml") {
                let document = Html::parse_document(&body);
                (extract_title(&document), extract_text(&document))
            } else {
                (None, body.into_owned())
            };

        Ok(Article {
            url: url.to_string(),
            title,
            text,
        })
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Collect text from the document body, skipping non-content subtrees.
fn extract_text(document: &Html) -> String {
    let body_selector = Selector::parse("body").ok();
    let root = body_selector
        .as_ref()
        .and_then(|s| document.select(s).next())
        .unwrap_or_else(|| document.root_element());

    let mut parts = Vec::new();
    collect_text(root, &mut parts);
    parts.join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
