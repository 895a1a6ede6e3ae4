//! Tool types following the OpenAI function calling schema.
//!
//! The invoking agent framework hands each tool a JSON arguments string and
//! expects a textual result under all circumstances; failures come back as
//! text, never as a propagated fault.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Tool definition advertised to the LLM.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Always "function".
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    /// Build a function-type definition, the only kind this tool set uses.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Function details within a tool definition.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    /// Function name (e.g. "rag_query").
    pub name: String,
    /// Human-readable description shown to the model.
    pub description: String,
    /// JSON Schema for the arguments object.
    pub parameters: serde_json::Value,
}

/// Tool call requested by the LLM.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolCall {
    /// Unique id for this call.
    pub id: String,
    /// Always "function".
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

/// Function call details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON string of arguments.
    pub arguments: String,
}

/// Result handed back to the framework.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Id of the tool call this responds to.
    pub tool_call_id: String,
    /// Result text (or error message).
    pub content: String,
    /// Whether dispatch succeeded.
    pub success: bool,
}

impl ToolResult {
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    pub fn error(tool_call_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: message.into(),
            success: false,
        }
    }
}

/// Trait implemented by every tool wrapper.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Definition advertised to the LLM.
    fn definition(&self) -> ToolDefinition;

    /// Tool name.
    fn name(&self) -> &str;

    /// Run the tool with a JSON arguments string.
    ///
    /// `Err` is reserved for argument-schema violations; runtime failures
    /// are returned as descriptive `Ok` strings so the framework always
    /// receives text.
    async fn execute(&self, arguments: &str) -> Result<String, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_serializes_to_function_calling_schema() {
        let def = ToolDefinition::function(
            "crawl",
            "Crawl a url.",
            serde_json::json!({"type": "object", "properties": {}}),
        );

        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "crawl");
        assert_eq!(value["function"]["parameters"]["type"], "object");
    }
}
