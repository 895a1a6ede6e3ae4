//! Callable tool wrappers for an LLM agent framework.
//!
//! Each tool is a thin adapter: it takes a small JSON arguments string,
//! forwards it to an external HTTP service or embedded library, and returns
//! a string result. Failures come back as text - the invoking framework
//! never sees a propagated fault.

mod config;
mod error;
mod executor;
mod registry;
mod types;
pub mod builtin;

pub use config::{CrawlToolConfig, RagToolConfig, SearchToolConfig, ToolsConfig};
pub use error::ToolError;
pub use executor::ToolExecutor;
pub use registry::{build_registry, ToolRegistry};
pub use types::*;

// The collaborator clients the tools are built on, re-exported for
// embedders that drive them directly.
pub use rag_client::{RagClient, RagConfig, RagError};
pub use volcengine_tts::{TtsAudio, TtsError, VolcengineTts};
pub use web_crawler::{Article, CrawlError, Crawler, HttpCrawler};
