//! Application configuration loading.
//!
//! Structured configuration supplies the two identity properties
//! (`application.name`, `application.group`) and, optionally, an explicit
//! resource attribute map that takes precedence over everything else during
//! resolution. Config files are YAML or JSON, dispatched on file extension.
//!
//! ```yaml
//! application:
//!   name: checkout
//!   group: payments
//! resource_attributes:
//!   deployment.environment: staging
//! ```

use crate::attributes::AttributeSet;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Identity metadata for the running application, sourced from structured
/// configuration (never from the process environment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApplicationMetadata {
    /// Logical application name, used as the `service.name` fallback.
    #[serde(default)]
    pub name: Option<String>,
    /// Logical application group, used as the `service.group` fallback.
    #[serde(default)]
    pub group: Option<String>,
}

impl ApplicationMetadata {
    /// Application name, if configured.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Application group, if configured.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Application identity metadata.
    #[serde(default)]
    pub application: ApplicationMetadata,
    /// Explicit resource attributes. A non-empty map here shadows every
    /// environment-derived attribute during resolution; file order is
    /// preserved in the resolved output.
    #[serde(default)]
    pub resource_attributes: AttributeSet,
}

impl AppConfig {
    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML in {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config_parses() {
        let config: AppConfig = serde_yaml::from_str(
            "application:\n  name: checkout\n  group: payments\nresource_attributes:\n  deployment.environment: staging\n",
        )
        .unwrap();
        assert_eq!(config.application.name(), Some("checkout"));
        assert_eq!(config.application.group(), Some("payments"));
        assert_eq!(
            config.resource_attributes.get("deployment.environment"),
            Some("staging")
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.application.name(), None);
        assert_eq!(config.application.group(), None);
        assert!(config.resource_attributes.is_empty());
    }
}
