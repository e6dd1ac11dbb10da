use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Connection settings for the hosted PostgreSQL store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the settings from any key lookup. `DATABASE_URL` is required;
    /// the pool knobs fall back to defaults only when unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL must point at the backend store")?;

        let max_connections: u32 = setting(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let min_connections: u32 = setting(&lookup, "DB_MIN_CONNECTIONS", 1)?;
        let connect_timeout_secs: u64 = setting(&lookup, "DB_CONNECT_TIMEOUT", 30)?;
        let idle_timeout_secs: u64 = setting(&lookup, "DB_IDLE_TIMEOUT", 600)?;

        if min_connections > max_connections {
            anyhow::bail!(
                "DB_MIN_CONNECTIONS ({}) exceeds DB_MAX_CONNECTIONS ({})",
                min_connections,
                max_connections
            );
        }

        Ok(DatabaseConfig {
            database_url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            idle_timeout: Duration::from_secs(idle_timeout_secs),
        })
    }

    /// Create the process-wide pool; callers close it on shutdown
    pub async fn create_pool(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(Some(self.idle_timeout))
            .connect(&self.database_url)
            .await
            .context("Failed to connect to the backend store")?;

        Ok(pool)
    }
}

fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} '{}'", key, raw)),
        None => Ok(default),
    }
}
