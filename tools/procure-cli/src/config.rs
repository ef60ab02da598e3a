//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use procure_commerce::{Currency, Farmer};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "PROCURE_API_BASE_URL";

/// Used when neither flag, environment nor config name a base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Remote service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Formatting settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Suppliers offered in the shop session. Empty means ask the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub farmers: Vec<Farmer>,
}

impl CliConfig {
    /// Load config from a file; `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Base URL with precedence flag > environment > config file > default.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        pick_base_url(flag, env.as_deref(), self.api.base_url.as_deref())
    }
}

fn pick_base_url(flag: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [flag, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

/// Remote service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the procurement API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Formatting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

/// Generate a default procure.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Procurement storefront configuration

[api]
# Overridden by --base-url and the {env} environment variable.
base_url = "{url}"
timeout_secs = 30

[display]
currency = "JPY"

# Suppliers offered by `procure shop`. Remove these to load them from the service.
# [[farmers]]
# id = "00000000-0000-0000-0000-000000000002"
# name = "Farmer Tanaka"
#
# [[farmers]]
# id = "00000000-0000-0000-0000-000000000003"
# name = "Farmer Suzuki"
"#,
        env = BASE_URL_ENV,
        url = DEFAULT_BASE_URL,
    )
}
