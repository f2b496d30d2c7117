pub mod agent;
pub mod catalog;
pub mod config;
pub mod email_support;
pub mod error;
pub mod prelude;
pub mod tools;

// lets `#[tool]` expand to `::kernel_tools::...` inside this crate as well
extern crate self as kernel_tools;

// re-export the proc-macro attribute for convenient use: `use kernel_tools::tool;` or `#[kernel_tools::tool(...)]`
pub use kernel_tools_macros::tool;

// crates referenced by `#[tool]` expansions
#[doc(hidden)]
pub use async_trait;
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
