//! Configuration module for ipquery-rs
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::api::request::BASE_URL;
use crate::error::{IpQueryError, Result};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API endpoint; a trailing `/` is added when missing
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional proxy URL (http, https or socks5)
    #[serde(default)]
    pub proxy: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// Custom config path
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

// Default value functions
fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("ipquery-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl ApiConfig {
    /// Default settings pointed at another endpoint
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location and environment variables
    ///
    /// A missing default file is created with the default configuration.
    pub fn load() -> Result<Self> {
        path::ensure_dir(&path::config_dir()?)?;
        Self::load_or_create(&path::config_file()?)
    }

    /// Load configuration from a user-supplied file
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error.
    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            return Err(IpQueryError::config(format!(
                "Config file not found: {}",
                config_file.display()
            )));
        }
        Self::read_file(config_file)
    }

    fn load_or_create(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            return Self::read_file(config_file);
        }

        let mut config = Self::default();
        config.save(config_file)?;
        config.global.config_path = Some(config_file.to_path_buf());
        config.apply_env();
        Ok(config)
    }

    fn read_file(config_file: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_file)
            .map_err(|e| IpQueryError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| IpQueryError::YamlError(format!("Failed to parse config file: {}", e)))?;

        config.global.config_path = Some(config_file.to_path_buf());

        // Override with environment variables
        config.apply_env();

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        self.apply_env_with(|key| env::var(key).ok());
    }

    fn apply_env_with<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(val) = lookup("IPQUERY_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("IPQUERY_TIMEOUT") {
            match val.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid IPQUERY_TIMEOUT value: {}", val),
            }
        }
        if let Some(val) = lookup("IPQUERY_PROXY") {
            self.api.proxy = Some(val).filter(|p| !p.is_empty());
        }
    }

    /// Log filter to start with when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.global.verbose { "debug" } else { "warn" }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| IpQueryError::YamlError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            path::ensure_dir(parent)?;
        }

        fs::write(path, yaml)
            .map_err(|e| IpQueryError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
