//! Built-in tools.

mod crawl;
mod retrieval;
mod search;

pub use crawl::CrawlTool;
pub use retrieval::RagQueryTool;
pub use search::WebSearchTool;
