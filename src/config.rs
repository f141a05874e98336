// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_CONFIG_PATH: &str = "RSS_READER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/rss_reader.toml";

/// Request timeout for the single feed fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn default_user_agent() -> String {
    format!("rss-reader/{}", env!("CARGO_PKG_VERSION"))
}

/// On-disk settings. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub user_agent: Option<String>,
    pub log_filter: Option<String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}

impl AppConfig {
    /// Load settings from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let file: FileConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(Self::from_file_config(file))
    }

    /// Load settings using env var + fallbacks:
    /// 1) $RSS_READER_CONFIG
    /// 2) config/rss_reader.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from(&default_p);
        }
        Ok(Self::default())
    }

    fn from_file_config(file: FileConfig) -> Self {
        let mut cfg = Self::default();
        if let Some(ua) = non_blank(file.user_agent) {
            cfg.fetch.user_agent = ua;
        }
        if let Some(filter) = non_blank(file.log_filter) {
            cfg.log_filter = filter;
        }
        cfg
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
