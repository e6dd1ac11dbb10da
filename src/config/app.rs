use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

/// How accessors treat a failed read against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Lists become empty, single rows absent, counts zero
    #[default]
    Degrade,
    /// Read failures propagate and surface as 500
    Strict,
}

impl FromStr for ReadPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(ReadPolicy::Degrade),
            "strict" => Ok(ReadPolicy::Strict),
            other => bail!("Unknown READ_FAILURE_POLICY '{}', expected degrade or strict", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub read_policy: ReadPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT '{}'", value))?,
            Err(_) => 3000,
        };
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let read_policy = match env::var("READ_FAILURE_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => ReadPolicy::default(),
        };

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            read_policy,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
