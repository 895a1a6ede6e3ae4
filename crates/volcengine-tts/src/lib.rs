//! Volcengine text-to-speech client.
//!
//! Thin synthesis adapter: one `POST /api/v1/tts` per call, base64 audio in
//! the response. No streaming, no retries.

mod client;
mod error;
mod types;

pub use client::VolcengineTts;
pub use error::TtsError;
pub use types::*;
