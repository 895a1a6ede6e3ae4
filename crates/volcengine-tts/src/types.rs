//! Wire types for the Volcengine TTS API.

use crate::error::TtsError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Synthesis request payload.
#[derive(Debug, Clone, Serialize)]
pub struct TtsRequest {
    pub app: AppPayload,
    pub user: UserPayload,
    pub audio: AudioPayload,
    pub request: RequestPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppPayload {
    pub appid: String,
    pub token: String,
    pub cluster: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub uid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioPayload {
    pub voice_type: String,
    pub encoding: String,
    pub speed_ratio: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPayload {
    pub reqid: String,
    pub text: String,
    pub text_type: String,
    pub operation: String,
}

/// Raw synthesis response. `code` 3000 means success.
#[derive(Debug, Clone, Deserialize)]
pub struct TtsResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reqid: Option<String>,
    /// Base64-encoded audio, present on success.
    #[serde(default)]
    pub data: Option<String>,
}

/// Synthesized audio returned to the caller.
#[derive(Debug, Clone)]
pub struct TtsAudio {
    /// Base64-encoded audio bytes, as delivered by the API.
    pub audio_data: String,
    /// Request id the audio was synthesized under.
    pub reqid: String,
}

impl TtsAudio {
    /// Decode the audio payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, TtsError> {
        Ok(BASE64.decode(&self.audio_data)?)
    }
}
