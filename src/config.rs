//! Configuration handling for the wizard

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Endpoint used until one is configured
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/your-id";

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Remote endpoint receiving the HTTP POST
    pub endpoint: String,
    /// Use the alternate delivery path instead of HTTP POST
    pub use_alternate_delivery: bool,
    /// Form definition file; the built-in contact form when unset
    pub form_path: Option<PathBuf>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            use_alternate_delivery: false,
            form_path: None,
        }
    }
}

impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formwizard", "formwizard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let config: WizardConfig = serde_json::from_str(&content)
                    .with_context(|| format!("invalid configuration in {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.use_alternate_delivery);
        assert!(config.form_path.is_none());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let json = r#"{"use_alternate_delivery": true}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.use_alternate_delivery);
        assert_eq!(parsed.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: WizardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "https://example.com/f/1", "unknown_field": "value"}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, "https://example.com/f/1");
    }

    #[test]
    fn test_serialization() {
        let config = WizardConfig {
            endpoint: "https://example.com/f/2".to_string(),
            use_alternate_delivery: true,
            form_path: Some(PathBuf::from("/tmp/form.json")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WizardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint, "https://example.com/f/2");
        assert!(parsed.use_alternate_delivery);
        assert_eq!(parsed.form_path, Some(PathBuf::from("/tmp/form.json")));
    }

    #[test]
    fn test_load_returns_ok() {
        // Default config when the file does not exist
        let result = WizardConfig::load();
        assert!(result.is_ok());
    }
}
