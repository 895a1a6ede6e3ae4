//! Crawl errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// HTTP transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status.
    #[error("page returned status {status}")]
    Status { status: u16 },

    /// Response body exceeded the size cap.
    #[error("page too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}
