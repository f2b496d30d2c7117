use std::path::Path;

use serde::Deserialize;

/// Largest indent accepted for the catalog document.
pub const MAX_INDENT: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for [`CatalogBuilder`](crate::catalog::CatalogBuilder).
///
/// ```toml
/// indent = 2
/// permissive_registry = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Spaces per nesting level in the catalog JSON.
    pub indent: usize,
    /// Also register members whose declared attributes mention the tool tag
    /// without carrying it.
    pub permissive_registry: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            permissive_registry: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::MissingConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::InvalidConfig(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.indent, 2);
        assert!(config.permissive_registry);
    }

    #[test]
    fn overrides_are_applied() {
        let config = CatalogConfig::from_toml_str("indent = 4\npermissive_registry = false").unwrap();
        assert_eq!(config.indent, 4);
        assert!(!config.permissive_registry);
    }

    #[test]
    fn oversized_indent_is_rejected() {
        let err = CatalogConfig::from_toml_str("indent = 9").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        let err = CatalogConfig::from_toml_str("indnet = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = CatalogConfig::from_file("/nonexistent/kernel-tools.toml").unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfig(_)));
    }
}
