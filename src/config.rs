use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gedview: GedviewConfig,
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

/// Store and process settings
#[derive(Debug, Clone, Deserialize)]
pub struct GedviewConfig {
    /// SQLite database holding `wt_individuals` and `wt_families`.
    pub db_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
        }
    }
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in GEDVIEW_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let config_path = std::env::var("GEDVIEW_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        Self::from_path(&config_path)
    }

    /// Load and validate configuration from an explicit path
    pub fn from_path(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.gedview.db_path.as_os_str().is_empty() {
            anyhow::bail!("gedview.db_path must not be empty");
        }

        if let Some(parent) = self.gedview.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!(
                    "Directory for gedview.db_path does not exist: {}",
                    parent.display()
                );
            }
        }

        if !LOG_LEVELS.contains(&self.gedview.log_level.to_lowercase().as_str()) {
            anyhow::bail!(
                "gedview.log_level must be one of {:?}, got {}",
                LOG_LEVELS,
                self.gedview.log_level
            );
        }

        if self.http_server.port == 0 {
            anyhow::bail!("http_server.port must be greater than 0");
        }

        if self.http_server.host.trim().is_empty() {
            anyhow::bail!("http_server.host must not be empty");
        }

        Ok(())
    }

    /// Get database path
    pub fn db_path(&self) -> &Path {
        &self.gedview.db_path
    }

    /// Socket address the HTTP server binds to
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_server.host, self.http_server.port)
    }
}
