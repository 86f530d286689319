//! Centralized configuration (environment variables + defaults).

use anyhow::{Context, Result};

/// Placeholder shared secret used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "secret-api-key-123";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Centrally handled errors carry a `stack` entry.
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("development") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Shared secret expected in the `X-API-Key` header.
    pub api_key: String,
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: DEFAULT_API_KEY.to_string(),
            environment: Environment::Production,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `API_KEY` and `APP_ENV`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let api_key = lookup("API_KEY")
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key,
            environment: Environment::parse(lookup("APP_ENV").as_deref()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Port of the standalone greeting server (`GREETING_PORT`, default 3000).
pub fn greeting_port() -> Result<u16> {
    match std::env::var("GREETING_PORT") {
        Ok(raw) => parse_port("GREETING_PORT", &raw),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{var} must be a valid port number, got {raw:?}"))
}
