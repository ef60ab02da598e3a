//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use procure_commerce::Currency;
use procure_data::ProcurementApi;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["procure.toml", ".procure.toml", "procure.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Resolved API base URL.
    pub base_url: String,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, base_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        let base_url = config.resolve_base_url(base_url);
        tracing::debug!(base_url = %base_url, config = ?config_path, "loaded configuration");
        match &config_path {
            Some(path) => output.debug(&format!("Using config {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            base_url,
            cwd,
        })
    }

    /// Find the nearest config file walking up from `start`.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// API client for the resolved base URL.
    pub fn api(&self) -> Result<ProcurementApi> {
        let api = ProcurementApi::new(self.base_url.as_str())
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        Ok(api.with_timeout(Duration::from_secs(self.config.api.timeout_secs)))
    }

    pub fn currency(&self) -> Currency {
        self.config.display.currency
    }

    /// Path `config init` writes to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}
