//! Client for a chat-completion style RAG (Retrieval-Augmented Generation)
//! server.
//!
//! One query maps to one `POST` with a single user turn and `stream: false`.
//! Connection settings come from an explicit [`RagConfig`], which can also be
//! resolved from the `RAG_SERVER_*` environment variables.

mod client;
mod config;
mod error;
mod types;

pub use client::RagClient;
pub use config::{RagConfig, ENV_AUTH_TOKEN, ENV_ENDPOINT, ENV_MODEL, ENV_TIMEOUT};
pub use error::RagError;
pub use types::*;
