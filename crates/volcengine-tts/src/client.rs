//! Volcengine TTS HTTP client.

use crate::error::TtsError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "https://openspeech.bytedance.com";
const DEFAULT_CLUSTER: &str = "volcano_tts";
const DEFAULT_VOICE_TYPE: &str = "BV700_V2_streaming";
const DEFAULT_ENCODING: &str = "mp3";

/// Application code the API uses for a successful synthesis.
const CODE_SUCCESS: i64 = 3000;

/// Volcengine text-to-speech client.
///
/// The access token is held as a `SecretString` to keep it out of logs and
/// debug output.
#[derive(Clone)]
pub struct VolcengineTts {
    client: Client,
    base_url: String,
    appid: String,
    access_token: SecretString,
    cluster: String,
    voice_type: String,
    encoding: String,
    speed_ratio: f32,
}

impl VolcengineTts {
    /// Create a client for an app id and access token, with default
    /// cluster, voice and encoding.
    pub fn new(appid: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            appid: appid.into(),
            access_token: SecretString::new(access_token.into()),
            cluster: DEFAULT_CLUSTER.into(),
            voice_type: DEFAULT_VOICE_TYPE.into(),
            encoding: DEFAULT_ENCODING.into(),
            speed_ratio: 1.0,
        }
    }

    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    pub fn with_voice_type(mut self, voice_type: impl Into<String>) -> Self {
        self.voice_type = voice_type.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_speed_ratio(mut self, speed_ratio: f32) -> Self {
        self.speed_ratio = speed_ratio;
        self
    }

    /// Override the API base URL (self-hosted gateways, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Synthesize speech for a piece of text.
    ///
    /// One blocking round trip per call; success is application code 3000
    /// with a base64 audio payload.
    pub async fn text_to_speech(&self, text: &str) -> Result<TtsAudio, TtsError> {
        let reqid = Uuid::new_v4().to_string();
        let request = TtsRequest {
            app: AppPayload {
                appid: self.appid.clone(),
                token: self.access_token.expose_secret().clone(),
                cluster: self.cluster.clone(),
            },
            user: UserPayload {
                uid: self.appid.clone(),
            },
            audio: AudioPayload {
                voice_type: self.voice_type.clone(),
                encoding: self.encoding.clone(),
                speed_ratio: self.speed_ratio,
            },
            request: RequestPayload {
                reqid: reqid.clone(),
                text: text.to_string(),
                text_type: "plain".into(),
                operation: "query".into(),
            },
        };

        debug!(reqid = %reqid, voice = %self.voice_type, "Requesting speech synthesis");

        let response = self
            .client
            .post(format!("{}/api/v1/tts", self.base_url))
            // Volcengine uses a semicolon after the scheme, not a space.
            .header(
                "Authorization",
                format!("Bearer;{}", self.access_token.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: TtsResponse = serde_json::from_str(&body)?;
        if parsed.code != CODE_SUCCESS {
            return Err(TtsError::Api {
                code: parsed.code,
                message: parsed.message.unwrap_or_default(),
            });
        }

        let audio_data = parsed.data.ok_or(TtsError::Api {
            code: parsed.code,
            message: "missing audio data".into(),
        })?;

        Ok(TtsAudio {
            audio_data,
            reqid: parsed.reqid.unwrap_or(reqid),
        })
    }
}
