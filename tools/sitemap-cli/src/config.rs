//! CLI configuration.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "SITEMAP_BASE_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Environment-specific overrides.
    #[serde(default)]
    pub environments: HashMap<String, SitemapConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Get environment-specific config. Unset override fields keep the base value.
    pub fn for_environment(&self, env: &str) -> CliConfig {
        let mut config = self.clone();

        if let Some(overrides) = self.environments.get(env) {
            config.sitemap = config.sitemap.merged_with(overrides);
        }

        config
    }
}

/// Sitemap settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Base URL paths are resolved against (e.g. `https://shop.example.com`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Route manifest path (JSON or TOML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Where to write sitemap.xml. Stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl SitemapConfig {
    fn merged_with(&self, overrides: &SitemapConfig) -> SitemapConfig {
        SitemapConfig {
            base_url: overrides.base_url.clone().or_else(|| self.base_url.clone()),
            manifest: overrides.manifest.clone().or_else(|| self.manifest.clone()),
            output: overrides.output.clone().or_else(|| self.output.clone()),
        }
    }
}

/// Pick the base URL: flag, then environment variable, then config.
pub fn resolve_base_url(
    flag: Option<&str>,
    env_value: Option<String>,
    config: &SitemapConfig,
) -> Option<String> {
    flag.map(str::to_string)
        .or(env_value)
        .or_else(|| config.base_url.clone())
}
