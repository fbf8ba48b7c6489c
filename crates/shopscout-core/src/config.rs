use serde::{Deserialize, Serialize};
use shopscout_api::{RetryConfig, DEFAULT_TIMEOUT, FAKESTORE_API_BASE};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::catalog::CatalogOptions;

/// Main configuration structure
///
/// Loaded from `config.toml`; CLI flags and env vars override it afterwards.
/// Priority: CLI > Env > File > Defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub catalog: CatalogOptions,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save config to disk
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// XDG config dir on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("shopscout");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Catalog host serving `GET /products`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Extra attempts on transient failures (0 = fail on first error)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Per-request timeout; a timed out request counts as transient
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    FAKESTORE_API_BASE.to_string()
}

fn default_max_retries() -> u32 {
    RetryConfig::default().max_retries
}

fn default_initial_delay() -> u64 {
    RetryConfig::default().initial_delay_ms
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            initial_delay_ms: self.initial_delay_ms,
            ..RetryConfig::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Apply search/category/rating/sort to the displayed list.
    /// Off means the list is always the raw fetch result.
    #[serde(default = "default_apply_filters")]
    pub apply_filters: bool,
}

fn default_apply_filters() -> bool {
    true
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            apply_filters: default_apply_filters(),
        }
    }
}
