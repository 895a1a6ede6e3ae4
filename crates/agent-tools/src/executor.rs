//! Tool executor with timeout and error handling.

use crate::registry::ToolRegistry;
use crate::types::{ToolCall, ToolResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, warn};

// Must outlive the RAG adapter's own 60 s default so the inner timeout is
// the one that reports.
const DEFAULT_TIMEOUT_SECS: u64 = 90;
const DEFAULT_MAX_RESPONSE_LEN: usize = 4000;

/// Executor for running tool calls with safety limits.
///
/// Every failure mode - unknown tool, argument error, timeout - is
/// converted into an error [`ToolResult`]; nothing propagates to the
/// invoking framework.
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
    timeout_secs: u64,
    max_response_len: usize,
}

impl ToolExecutor {
    /// Create a new executor.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_response_len: DEFAULT_MAX_RESPONSE_LEN,
        }
    }

    /// Set execution timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set maximum response length in characters.
    pub fn with_max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len;
        self
    }

    /// Execute a tool call.
    pub async fn execute(&self, tool_call: &ToolCall) -> ToolResult {
        let tool_name = &tool_call.function.name;
        info!(tool = %tool_name, "Executing tool");

        let tool = match self.registry.get_tool(tool_name) {
            Some(t) => t,
            None => {
                warn!(tool = %tool_name, "Tool not found or disabled");
                return ToolResult::error(
                    &tool_call.id,
                    format!("Tool '{}' not available", tool_name),
                );
            }
        };

        let result = timeout(
            Duration::from_secs(self.timeout_secs),
            tool.execute(&tool_call.function.arguments),
        )
        .await;

        match result {
            Ok(Ok(content)) => {
                let content = truncate_chars(&content, self.max_response_len);
                info!(tool = %tool_name, len = content.len(), "Tool executed");
                ToolResult::success(&tool_call.id, content)
            }
            Ok(Err(e)) => {
                error!(tool = %tool_name, error = %e, "Tool execution failed");
                ToolResult::error(&tool_call.id, format!("Error: {}", e))
            }
            Err(_) => {
                error!(tool = %tool_name, timeout = self.timeout_secs, "Tool timed out");
                ToolResult::error(
                    &tool_call.id,
                    format!("Tool timed out after {} seconds", self.timeout_secs),
                )
            }
        }
    }
}

/// Truncate on a character boundary, noting the original length.
fn truncate_chars(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!(
        "{}... [truncated, {} chars total]",
        truncated,
        content.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::types::{FunctionCall, Tool, ToolDefinition};
    use async_trait::async_trait;

    struct StaticTool {
        name: &'static str,
        reply: String,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl Tool for StaticTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::function(self.name, "Static tool", serde_json::json!({}))
        }

        fn name(&self) -> &str {
            self.name
        }

        async fn execute(&self, _arguments: &str) -> Result<String, ToolError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.reply.clone())
        }
    }

    fn call(name: &str) -> ToolCall {
        ToolCall {
            id: "call-1".into(),
            call_type: "function".into(),
            function: FunctionCall {
                name: name.into(),
                arguments: "{}".into(),
            },
        }
    }

    #[tokio::test]
    async fn execute_success() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: "fast",
            reply: "fast result".into(),
            delay: None,
        }));
        let executor = ToolExecutor::new(Arc::new(registry));

        let result = executor.execute(&call("fast")).await;
        assert!(result.success);
        assert_eq!(result.content, "fast result");
        assert_eq!(result.tool_call_id, "call-1");
    }

    #[tokio::test]
    async fn execute_timeout() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: "slow",
            reply: "done".into(),
            delay: Some(Duration::from_secs(5)),
        }));
        let executor = ToolExecutor::new(Arc::new(registry)).with_timeout(1);

        let result = executor.execute(&call("slow")).await;
        assert!(!result.success);
        assert!(result.content.contains("timed out"));
    }

    #[tokio::test]
    async fn execute_unknown_tool() {
        let executor = ToolExecutor::new(Arc::new(ToolRegistry::new()));
        let result = executor.execute(&call("nonexistent")).await;
        assert!(!result.success);
        assert!(result.content.contains("not available"));
    }

    #[tokio::test]
    async fn long_responses_are_truncated_on_char_boundaries() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(StaticTool {
            name: "verbose",
            reply: "déjà".repeat(100),
            delay: None,
        }));
        let executor = ToolExecutor::new(Arc::new(registry)).with_max_response_len(10);

        let result = executor.execute(&call("verbose")).await;
        assert!(result.success);
        assert!(result.content.starts_with("déjàdéjàdé"));
        assert!(result.content.contains("[truncated, 400 chars total]"));
    }
}
