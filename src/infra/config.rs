//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Listen address (`BIND_ADDR`, default `0.0.0.0:3000`).
    pub bind_addr: String,
    /// Pool size (`DB_MAX_CONNECTIONS`, default 5, at least 1).
    pub max_connections: u32,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", v))?
                .max(1),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
