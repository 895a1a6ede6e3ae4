//! Crawled page content.

/// Readable content extracted from one crawled page.
#[derive(Debug, Clone)]
pub struct Article {
    /// The URL the page was fetched from.
    pub url: String,
    /// Page title, when one was present.
    pub title: Option<String>,
    /// Extracted readable text.
    pub text: String,
}

impl Article {
    /// Render the article as markdown: the title as a heading, then the
    /// extracted text.
    pub fn to_markdown(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => format!("# {}\n\n{}", title, self.text),
            _ => self.text.clone(),
        }
    }
}
