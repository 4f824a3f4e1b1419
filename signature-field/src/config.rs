//! Field configuration.
//!
//! A [`FieldConfig`] can be built in code or loaded with figment from, in
//! increasing precedence:
//!
//! 1. Built-in defaults
//! 2. A config file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables with the `SIGFIELD_` prefix
//!
//! ```toml
//! name = "DocuSign Signatory"
//! clean_name = "DocuSign-Signatory"
//! service_name = "DocuSign"
//! initial_saved_value = ""
//! extra_help_text = "We will email you a signing link."
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldError, Result};
use crate::types::ElementType;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SIGFIELD_";

/// Configuration for one external signature field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    /// Field name reported with every commit.
    pub name: String,
    /// Name safe for use as an element identifier.
    #[serde(default)]
    pub clean_name: String,
    /// Signing service bound to every value this field produces.
    #[serde(default)]
    pub service_name: String,
    /// Persisted value to seed the field from.
    #[serde(default)]
    pub initial_saved_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_help_text: Option<String>,
    #[serde(default = "default_element_type")]
    pub element_type: ElementType,
}

fn default_element_type() -> ElementType {
    ElementType::ExternalSignature
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl FieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            clean_name: name.clone(),
            name,
            service_name: String::new(),
            initial_saved_value: String::new(),
            placeholder_text: None,
            extra_help_text: None,
            element_type: default_element_type(),
        }
    }

    pub fn with_clean_name(mut self, clean_name: impl Into<String>) -> Self {
        self.clean_name = clean_name.into();
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn with_saved_value(mut self, saved: impl Into<String>) -> Self {
        self.initial_saved_value = saved.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_text = Some(placeholder.into());
        self
    }

    pub fn with_extra_help_text(mut self, text: impl Into<String>) -> Self {
        self.extra_help_text = Some(text.into());
        self
    }

    /// Placeholder shown in an empty field. Falls back to the clean name,
    /// then the name.
    pub fn placeholder(&self) -> &str {
        match self.placeholder_text.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ if !self.clean_name.is_empty() => self.clean_name.as_str(),
            _ => self.name.as_str(),
        }
    }

    /// Layered figment for an optional config file.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(FieldConfig::default()));

        if let Some(path) = path {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            figment = match ext.as_deref() {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => {
                    return Err(FieldError::invalid_config(format!(
                        "unsupported config format: {}",
                        path.display()
                    )))
                }
            };
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into())))
    }

    /// Load and check a configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(FieldError::invalid_config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        let config: FieldConfig = Self::figment(path)?.extract()?;
        if config.name.trim().is_empty() {
            return Err(FieldError::invalid_config("field name must not be empty"));
        }

        debug!(
            name = %config.name,
            service = %config.service_name,
            "loaded field configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn placeholder_fallbacks() {
        let config = FieldConfig::new("DocuSign Signatory");
        assert_eq!(config.placeholder(), "DocuSign Signatory");

        let config = config.with_clean_name("DocuSign-Signatory");
        assert_eq!(config.placeholder(), "DocuSign-Signatory");

        let config = config.with_placeholder("Signer email");
        assert_eq!(config.placeholder(), "Signer email");
    }

    #[test]
    #[serial]
    fn load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("field.toml");
        fs::write(
            &path,
            r#"
name = "DocuSign Signatory"
service_name = "DocuSign"
extra_help_text = "extra"
"#,
        )
        .unwrap();

        let config = FieldConfig::load(Some(&path)).unwrap();
        assert_eq!(config.name, "DocuSign Signatory");
        assert_eq!(config.service_name, "DocuSign");
        assert_eq!(config.extra_help_text.as_deref(), Some("extra"));
        assert_eq!(config.initial_saved_value, "");
        assert_eq!(config.element_type, ElementType::ExternalSignature);
    }

    #[test]
    #[serial]
    fn load_yaml_and_json() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("field.yaml");
        fs::write(&yaml, "name: Signer\nservice_name: DocuSign\n").unwrap();
        assert_eq!(FieldConfig::load(Some(&yaml)).unwrap().service_name, "DocuSign");

        let json = dir.path().join("field.json");
        fs::write(
            &json,
            r#"{"name":"Signer","initial_saved_value":"{\"identity\":{\"email\":\"a@b.io\"}}"}"#,
        )
        .unwrap();
        let config = FieldConfig::load(Some(&json)).unwrap();
        assert_eq!(
            config.initial_saved_value,
            r#"{"identity":{"email":"a@b.io"}}"#
        );
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("field.toml");
        fs::write(&path, "name = \"Signer\"\nservice_name = \"DocuSign\"\n").unwrap();

        std::env::set_var("SIGFIELD_SERVICE_NAME", "HelloSign");
        let result = FieldConfig::load(Some(&path));
        std::env::remove_var("SIGFIELD_SERVICE_NAME");

        assert_eq!(result.unwrap().service_name, "HelloSign");
    }

    #[test]
    #[serial]
    fn missing_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("field.toml");
        fs::write(&path, "service_name = \"DocuSign\"\n").unwrap();

        let err = FieldConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig { .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = FieldConfig::figment(Some(Path::new("field.ini"))).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = FieldConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
