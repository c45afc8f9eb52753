// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Size of astra's blocking worker pool.
    pub workers: usize,
    /// JSON catalog loaded at startup; the built-in catalog when unset.
    pub catalog_path: Option<PathBuf>,
    /// Directory holding `header.html` / `footer.html`; built-in markup when unset.
    pub fragments_dir: Option<PathBuf>,
    /// Output of `wasm-pack build effects --target web`.
    pub pkg_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            catalog_path: None,
            fragments_dir: None,
            pkg_dir: PathBuf::from("effects/pkg"),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FARMLINK_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
    #[error("FARMLINK_WORKERS must be a positive integer, got {0}")]
    InvalidWorkers(String),
    #[error("FARMLINK_LOG_FORMAT must be `pretty` or `json`, got {0}")]
    InvalidLogFormat(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        if let Some(raw) = get("FARMLINK_ADDR") {
            cfg.addr = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?;
        }

        if let Some(raw) = get("FARMLINK_WORKERS") {
            cfg.workers = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidWorkers(raw.clone()))?;
        }

        cfg.catalog_path = get("FARMLINK_CATALOG").map(PathBuf::from);
        cfg.fragments_dir = get("FARMLINK_FRAGMENTS_DIR").map(PathBuf::from);

        if let Some(dir) = get("FARMLINK_PKG_DIR") {
            cfg.pkg_dir = PathBuf::from(dir);
        }

        if let Some(raw) = get("FARMLINK_LOG_FORMAT") {
            cfg.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::InvalidLogFormat(raw)),
            };
        }

        Ok(cfg)
    }
}
