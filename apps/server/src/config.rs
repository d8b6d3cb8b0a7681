use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Upper bound for each call to the market data provider.
    pub provider_timeout: Duration,
    /// `text` or `json`
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("STOCKDESK_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("Invalid STOCKDESK_LISTEN_ADDR")?;
        let cors_allow = std::env::var("STOCKDESK_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms = millis_from_env("STOCKDESK_REQUEST_TIMEOUT_MS", 30_000);
        let provider_timeout_ms = millis_from_env("STOCKDESK_PROVIDER_TIMEOUT_MS", 10_000);
        let log_format = std::env::var("STOCKDESK_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            provider_timeout: Duration::from_millis(provider_timeout_ms),
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            provider_timeout: Duration::from_millis(10_000),
            log_format: "text".to_string(),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
