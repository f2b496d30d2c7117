use super::error::ToolError;
use super::schema::ArgSchema;

/// Capability tag attached by `#[tool]`. A member is only a tool if it carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolTag {
    pub description: Option<&'static str>,
}

impl ToolTag {
    pub const fn new(description: Option<&'static str>) -> Self {
        Self { description }
    }
}

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// The capability tag, if this callable was declared as a tool.
    fn tag(&self) -> Option<ToolTag> {
        None
    }

    /// Inline documentation of the underlying function.
    fn doc(&self) -> Option<&str> {
        None
    }

    /// Other attributes declared on the underlying function, rendered as source text.
    fn attributes(&self) -> &[&str] {
        &[]
    }

    /// Tag description first, then the doc comment, then empty.
    fn description(&self) -> &str {
        if let Some(d) = self.tag().and_then(|t| t.description).filter(|d| !d.is_empty()) {
            return d;
        }
        self.doc().map(str::trim).unwrap_or_default()
    }

    /// Parameters in declaration order.
    fn args(&self) -> Vec<ArgSchema>;

    async fn run(&self, input: serde_json::Value) -> Result<String, ToolError>;
}
