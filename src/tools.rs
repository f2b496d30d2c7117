pub mod error;
pub mod macros;
pub mod namespace;
pub mod registry;
pub mod schema;
pub mod traits;

pub use namespace::{Member, Namespace};
pub use registry::ToolRegistry;
pub use schema::{ArgSchema, ArgType};
pub use traits::{Tool, ToolTag};

/// Name of the capability tag, as written in `#[tool]`.
pub const TOOL_TAG: &str = "tool";
