//! Web crawler: fetch a URL and extract readable content as markdown.

mod article;
mod crawler;
mod error;

pub use article::Article;
pub use crawler::{Crawler, HttpCrawler};
pub use error::CrawlError;

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn crawl_extracts_markdown_from_html() {
        let mock_server = MockServer::start().await;

        let html = r#"<html>
            <head><title>Release Notes</title><script>track()</script></head>
            <body><h1>What changed</h1><p>Faster parsing.</p></body>
        </html>"#;

        Mock::given(method("GET"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/post", mock_server.uri());
        let article = HttpCrawler::new().crawl(&url).await.unwrap();

        assert_eq!(article.url, url);
        let markdown = article.to_markdown();
        assert!(markdown.starts_with("# Release Notes"));
        assert!(markdown.contains("What changed"));
        assert!(markdown.contains("Faster parsing."));
        assert!(!markdown.contains("track()"));
    }

    #[tokio::test]
    async fn crawl_passes_non_html_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{\"plain\": true}", "application/json"))
            .mount(&mock_server)
            .await;

        let article = HttpCrawler::new().crawl(&mock_server.uri()).await.unwrap();
        assert_eq!(article.title, None);
        assert_eq!(article.text, "{\"plain\": true}");
    }

    #[tokio::test]
    async fn crawl_reports_upstream_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = HttpCrawler::new().crawl(&mock_server.uri()).await;
        assert!(matches!(result, Err(CrawlError::Status { status: 404 })));
    }
}
