//! Service configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (COURSECAT_BIND, COURSECAT_PRODUCTION,
//!    COURSECAT_CDN_DOMAIN, COURSECAT_STATIC_PREFIX)
//! 2. Config file (YAML, path given on the command line)
//! 3. Defaults
//!
//! Configuration is resolved once at startup and passed by value; there is
//! no ambient global.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::locator::CdnLocator;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub cdn: CdnSection,
    #[serde(default)]
    pub activity: ActivitySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    /// Address to bind the HTTP listener to
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CdnSection {
    /// Whether asset locators should point at the CDN
    pub production: Option<bool>,
    /// CDN domain, e.g. "https://d123abcdef.cloudfront.net"
    pub domain: Option<String>,
    /// Local prefix used when not serving through the CDN
    pub static_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivitySection {
    /// Size of the recent activity-event buffer
    pub capacity: Option<usize>,
}

/// Resolved configuration with defaults and env overrides applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub bind: String,
    pub production: bool,
    pub cdn_domain: String,
    pub static_prefix: String,
    pub activity_capacity: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            production: false,
            cdn_domain: String::new(),
            static_prefix: "/static".to_string(),
            activity_capacity: 256,
        }
    }
}

impl ResolvedConfig {
    /// Load configuration: defaults, then the optional file, then env
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut resolved = Self::default();

        if let Some(path) = path {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let file: ConfigFile =
                serde_yaml::from_str(&raw).context("Failed to parse config YAML")?;
            resolved.apply_file(file);
        }

        resolved.apply_env();
        Ok(resolved)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(bind) = file.server.bind {
            self.bind = bind;
        }
        if let Some(production) = file.cdn.production {
            self.production = production;
        }
        if let Some(domain) = file.cdn.domain {
            self.cdn_domain = domain;
        }
        if let Some(prefix) = file.cdn.static_prefix {
            self.static_prefix = prefix;
        }
        if let Some(capacity) = file.activity.capacity {
            self.activity_capacity = capacity;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(bind) = std::env::var("COURSECAT_BIND") {
            self.bind = bind;
        }
        if let Ok(value) = std::env::var("COURSECAT_PRODUCTION") {
            self.production = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Ok(domain) = std::env::var("COURSECAT_CDN_DOMAIN") {
            self.cdn_domain = domain;
        }
        if let Ok(prefix) = std::env::var("COURSECAT_STATIC_PREFIX") {
            self.static_prefix = prefix;
        }
    }

    /// Build the asset locator for this deployment.
    pub fn locator(&self) -> CdnLocator {
        CdnLocator::new(
            self.production,
            self.cdn_domain.clone(),
            self.static_prefix.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;
    use crate::locator::AssetLocator;

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert!(!config.production);
        assert_eq!(config.static_prefix, "/static");
        assert_eq!(config.activity_capacity, 256);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let yaml = r#"
server:
  bind: "0.0.0.0:9000"
cdn:
  production: true
  domain: "https://cdn.example.com/"
activity:
  capacity: 64
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();

        let mut config = ResolvedConfig::default();
        config.apply_file(file);

        assert_eq!(config.bind, "0.0.0.0:9000");
        assert!(config.production);
        assert_eq!(config.cdn_domain, "https://cdn.example.com/");
        // Untouched sections keep their defaults
        assert_eq!(config.static_prefix, "/static");
        assert_eq!(config.activity_capacity, 64);
    }

    #[test]
    fn test_locator_reflects_config() {
        let config = ResolvedConfig {
            production: true,
            cdn_domain: "https://cdn.example.com".to_string(),
            ..Default::default()
        };

        let locator = config.locator();
        assert_eq!(
            locator.locate(ContentKind::Video, "intro.mp4"),
            "https://cdn.example.com/video/intro.mp4"
        );
    }
}
