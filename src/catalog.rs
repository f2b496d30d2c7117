use std::sync::Arc;

use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::tools::{Member, Namespace, ToolRegistry, TOOL_TAG};

pub mod encoding;
pub mod types;

pub use types::{CatalogEntry, ToolCatalog, ToolDefinition};

/// Names of the builder's own operations. Members using them are never
/// catalogued or registered.
pub const RESERVED_NAMES: [&str; 2] = ["build_catalog", "collect_registry"];

/// Turns a [`Namespace`] into the planner's JSON tool catalog and the
/// dispatcher's [`ToolRegistry`]. Every call rebuilds from scratch.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: CatalogConfig,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Typed catalog: tagged members in declaration order.
    pub fn definitions(&self, namespace: &Namespace) -> ToolCatalog {
        let definitions = namespace
            .members()
            .iter()
            .filter(|m| !is_skipped(m))
            .filter(|m| {
                let tagged = m.handler.tag().is_some();
                if !tagged {
                    debug!(member = %m.name, namespace = namespace.name(), "skipping untagged member");
                }
                tagged
            })
            .map(|m| ToolDefinition::from_tool(namespace.agent(), m.name.clone(), m.handler.as_ref()))
            .collect();
        ToolCatalog { definitions }
    }

    /// JSON array of `{agent, function, description, arguments}` records.
    pub fn build_catalog(&self, namespace: &Namespace) -> Result<String> {
        let catalog = self.definitions(namespace);
        let json = catalog.to_json(self.config.indent)?;
        info!(
            namespace = namespace.name(),
            agent = %namespace.agent(),
            tools = catalog.len(),
            "built tool catalog"
        );
        Ok(json)
    }

    /// Name -> callable map for dispatch.
    ///
    /// Besides tagged members this also takes members whose declared attributes
    /// mention the tag name, unless `permissive_registry` is off.
    pub fn collect_registry(&self, namespace: &Namespace) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        for member in namespace.members().iter().filter(|m| !is_skipped(m)) {
            let tagged = member.handler.tag().is_some();
            let mentioned = self.config.permissive_registry
                && member.handler.attributes().iter().any(|a| a.contains(TOOL_TAG));
            if tagged || mentioned {
                if !tagged {
                    debug!(member = %member.name, "registering member that mentions the tool tag");
                }
                registry.insert(member.name.clone(), Arc::clone(&member.handler));
            }
        }
        info!(namespace = namespace.name(), tools = registry.len(), "collected tool registry");
        registry
    }
}

fn is_skipped(member: &Member) -> bool {
    let skipped = member.name.starts_with('_') || RESERVED_NAMES.contains(&member.name.as_str());
    if skipped {
        debug!(member = %member.name, "skipping private or reserved member");
    }
    skipped
}
