// src/config/app.rs
use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::keywords::ENV_KEYWORDS_PATH;

pub const ENV_BIND_ADDR: &str = "ASO_BIND_ADDR";
pub const ENV_METRICS: &str = "ASO_METRICS";
pub const ENV_LOG_FORMAT: &str = "ASO_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Process-level settings, read once at startup (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Alternative keyword tables; `None` uses the built-in ones.
    pub keywords_path: Option<PathBuf>,
    /// Install the Prometheus recorder and expose `/metrics`.
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_addr = std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{ENV_BIND_ADDR}='{raw_addr}' is not a socket address"))?;

        let keywords_path = std::env::var(ENV_KEYWORDS_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let metrics_enabled = parse_flag(std::env::var(ENV_METRICS).ok()).unwrap_or(true);

        let log_format = match std::env::var(ENV_LOG_FORMAT)
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Ok(Self {
            bind_addr,
            keywords_path,
            metrics_enabled,
            log_format,
        })
    }
}

// "1"/"true"/"on"/"yes" and "0"/"false"/"off"/"no"; anything else is ignored
fn parse_flag(raw: Option<String>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
