pub use crate::agent::AgentType;
pub use crate::catalog::{CatalogBuilder, ToolCatalog, ToolDefinition};
pub use crate::config::CatalogConfig;
pub use crate::error::{Error, Result};
pub use crate::tool;
pub use crate::tools::{
    error::ToolError,
    ArgSchema, ArgType, Namespace, Tool, ToolRegistry, ToolTag,
};
