//! Wire types for the chat-completion style retrieval protocol.

use serde::{Deserialize, Serialize};

/// Single-turn request payload. Streaming is always disabled.
#[derive(Debug, Clone, Serialize)]
pub struct RagRequest {
    pub model: String,
    pub messages: Vec<RagMessage>,
    pub stream: bool,
}

/// One chat message in the request.
#[derive(Debug, Clone, Serialize)]
pub struct RagMessage {
    pub role: &'static str,
    pub content: String,
}

impl RagRequest {
    /// Build the single user-turn payload for a query.
    pub fn single_turn(model: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![RagMessage {
                role: "user",
                content: query.into(),
            }],
            stream: false,
        }
    }
}

/// Response shape. Every level defaults to empty so an unexpected body
/// yields an empty answer rather than a hard failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RagResponse {
    #[serde(default)]
    pub choices: Vec<RagChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagChoice {
    #[serde(default)]
    pub message: Option<RagChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl RagResponse {
    /// `choices[0].message.content`, or the empty string when any segment
    /// of that path is missing.
    pub fn answer(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_shape() {
        let request = RagRequest::single_turn("model", "what is rust?");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "model",
                "messages": [{"role": "user", "content": "what is rust?"}],
                "stream": false
            })
        );
    }

    #[test]
    fn answer_extracts_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"X"}},{"message":{"content":"Y"}}]}"#;
        let response: RagResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.answer(), "X");
    }

    #[test]
    fn answer_is_empty_when_path_segments_missing() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            let response: RagResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.answer(), "", "body: {}", body);
        }
    }
}
