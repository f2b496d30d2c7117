use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use super::traits::Tool;

/// Name -> callable map used by the orchestrator's dispatch step.
/// Keeps insertion order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    entries: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a tool under `name`, replacing any previous entry with that name.
    pub fn insert(&mut self, name: impl Into<String>, tool: Arc<dyn Tool>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = tool,
            None => self.entries.push((name, tool)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| Arc::clone(t))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Tool>)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Run the tool registered under `name` with the arguments chosen by the orchestrator.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        debug!(tool = name, "dispatching tool call");
        tool.run(args).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[crate::tool(description = "Echo the given text")]
    fn echo(text: String) -> String {
        text
    }

    #[crate::tool(description = "Shout the given text")]
    fn shout(text: String) -> String {
        text.to_uppercase()
    }

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.insert("b", Arc::new(EchoTool));
        registry.insert("a", Arc::new(EchoTool));
        registry.insert("b", Arc::new(ShoutTool));

        assert_eq!(registry.names(), vec!["b", "a"]);
        let got = block_on(registry.dispatch("b", json!({ "text": "hi" }))).unwrap();
        assert_eq!(got, "HI");
    }

    #[test]
    fn dispatch_unknown_tool_fails() {
        let registry = ToolRegistry::new();
        let err = block_on(registry.dispatch("missing", json!({}))).unwrap_err();
        assert!(matches!(err, ToolError::ToolNotFound(name) if name == "missing"));
    }

    #[test]
    fn dispatch_with_bad_arguments_fails() {
        let mut registry = ToolRegistry::new();
        registry.insert("echo", Arc::new(EchoTool));
        let err = block_on(registry.dispatch("echo", json!({ "txt": "hi" }))).unwrap_err();
        assert!(matches!(err, ToolError::ParamsNotMatched(_)));
    }
}
