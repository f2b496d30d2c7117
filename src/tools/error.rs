#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool parameters do not match: {0}")]
    ParamsNotMatched(String),
}
