//! Tool registry for managing available tools.

use crate::builtin::{CrawlTool, RagQueryTool, WebSearchTool};
use crate::config::ToolsConfig;
use crate::types::{Tool, ToolDefinition};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

struct ToolEntry {
    tool: Arc<dyn Tool>,
    enabled: bool,
}

/// Registry of available tools.
///
/// Registration and enablement are separate: a tool disabled by
/// configuration stays registered (visible in [`list_tools`]) and can be
/// switched back on at runtime, but is invisible to the LLM and refused by
/// the executor until then.
///
/// [`list_tools`]: ToolRegistry::list_tools
pub struct ToolRegistry {
    entries: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a tool, enabled.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.register_with(tool, true);
    }

    /// Register a tool with an explicit enablement state.
    pub fn register_with(&mut self, tool: Arc<dyn Tool>, enabled: bool) {
        let name = tool.name().to_string();
        self.entries.insert(name, ToolEntry { tool, enabled });
    }

    /// Enable a registered tool by name.
    pub fn enable(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.enabled = true;
        }
    }

    /// Disable a registered tool by name.
    pub fn disable(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.enabled = false;
        }
    }

    /// Check if a tool is registered and enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).map(|e| e.enabled).unwrap_or(false)
    }

    /// Get definitions for all enabled tools.
    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        self.entries
            .values()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.tool.definition())
            .collect()
    }

    /// Get a tool by name (only if enabled).
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.entries
            .get(name)
            .filter(|entry| entry.enabled)
            .map(|entry| entry.tool.clone())
    }

    /// List all registered tool names, enabled or not.
    pub fn list_tools(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// List enabled tool names.
    pub fn list_enabled(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a registry with the builtin tools wired from configuration.
///
/// Config-disabled tools are registered disabled rather than omitted, so
/// they can be enabled at runtime. The search tool is the exception: it
/// needs an API key, and without one it is skipped entirely with a warning
/// rather than failing the whole registry.
pub fn build_registry(config: &ToolsConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register_with(Arc::new(RagQueryTool::new()), config.rag.enabled);
    registry.register_with(Arc::new(CrawlTool::new()), config.crawl.enabled);
    match config.search.api_key.as_deref() {
        Some(key) if !key.is_empty() => {
            registry.register_with(
                Arc::new(
                    WebSearchTool::new(key)
                        .with_max_results(config.search.max_results)
                        .with_timeout(config.search.timeout),
                ),
                config.search.enabled,
            );
        }
        _ if config.search.enabled => {
            warn!("web_search enabled but no API key configured, skipping")
        }
        _ => {}
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::types::ToolDefinition;
    use async_trait::async_trait;

    struct MockTool {
        name: String,
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::function(&self.name, "Mock tool", serde_json::json!({}))
        }

        fn name(&self) -> &str {
            &self.name
        }

        async fn execute(&self, _arguments: &str) -> Result<String, ToolError> {
            Ok("mock result".into())
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool {
            name: "test".into(),
        }));

        assert!(registry.get_tool("test").is_some());
        assert!(registry.is_enabled("test"));
    }

    #[test]
    fn disabled_tool_is_not_returned() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool {
            name: "test".into(),
        }));

        registry.disable("test");
        assert!(registry.get_tool("test").is_none());
        assert!(!registry.is_enabled("test"));
    }

    #[test]
    fn disabled_tool_stays_registered_and_can_be_reenabled() {
        let mut registry = ToolRegistry::new();
        registry.register_with(
            Arc::new(MockTool {
                name: "test".into(),
            }),
            false,
        );

        assert!(registry.get_tool("test").is_none());
        assert_eq!(registry.list_tools(), vec!["test"]);
        assert!(registry.list_enabled().is_empty());

        registry.enable("test");
        assert!(registry.get_tool("test").is_some());
        assert_eq!(registry.list_enabled(), vec!["test"]);
    }

    #[test]
    fn enabling_an_unknown_tool_is_a_no_op() {
        let mut registry = ToolRegistry::new();
        registry.enable("ghost");
        assert!(!registry.is_enabled("ghost"));
        assert!(registry.list_tools().is_empty());
    }

    #[test]
    fn definitions_cover_enabled_tools_only() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool {
            name: "tool1".into(),
        }));
        registry.register(Arc::new(MockTool {
            name: "tool2".into(),
        }));
        registry.disable("tool2");

        let defs = registry.get_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].function.name, "tool1");
    }

    #[test]
    fn build_registry_respects_config() {
        let config = ToolsConfig::default();
        let registry = build_registry(&config);

        // rag + crawl; search is skipped without an API key.
        assert!(registry.get_tool("rag_query").is_some());
        assert!(registry.get_tool("crawl").is_some());
        assert!(registry.get_tool("web_search").is_none());
        let mut enabled = registry.list_enabled();
        enabled.sort_unstable();
        assert_eq!(enabled, vec!["crawl", "rag_query"]);

        let mut config = ToolsConfig::default();
        config.search.api_key = Some("key".into());
        config.rag.enabled = false;
        let registry = build_registry(&config);
        assert!(registry.get_tool("web_search").is_some());
        assert!(registry.get_tool("rag_query").is_none());

        // Config-disabled tools stay registered for runtime enablement.
        let mut registered = registry.list_tools();
        registered.sort_unstable();
        assert_eq!(registered, vec!["crawl", "rag_query", "web_search"]);
    }
}
