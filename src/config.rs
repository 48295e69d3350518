//! Process configuration from environment variables.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite URL. `sqlite::memory:` (or any URL with `mode=memory`) keeps all data in process.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Pool size for file-backed stores. In-memory stores always use a single connection.
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `MAX_CONNECTIONS`, `BODY_LIMIT_BYTES`. Unset keys fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = match lookup("MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid { key: "MAX_CONNECTIONS", value: v })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BODY_LIMIT_BYTES", value: v })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };
        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, value: Option<String>, default: &str) -> Result<T, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
