use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use tracing::info;

/// Runtime settings for the API server. Every value comes from the process
/// environment (or `.env`) and falls back to a literal when unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: load_or("HOST", "0.0.0.0"),
            port: try_load("PORT", "5000")?,
            database_url: load_or("DATABASE_URL", "rideforyou.db"),
            sentry_dsn: env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.trim().is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = load_or(key, default);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_port_and_falls_back_on_default() {
        let port: u16 = try_load("RIDEFORYOU_TEST_UNSET_PORT", "5000").unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn rejects_unparsable_port() {
        let port: Result<u16> = try_load("RIDEFORYOU_TEST_UNSET_PORT", "not-a-port");
        assert!(port.is_err());
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        env::set_var("RIDEFORYOU_TEST_EMPTY_PORT", "");
        let port: u16 = try_load("RIDEFORYOU_TEST_EMPTY_PORT", "5000").unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn blank_host_falls_back_to_default() {
        env::set_var("RIDEFORYOU_TEST_BLANK_HOST", "  ");
        assert_eq!(load_or("RIDEFORYOU_TEST_BLANK_HOST", "0.0.0.0"), "0.0.0.0");
    }

    #[test]
    fn set_value_wins_over_default() {
        env::set_var("RIDEFORYOU_TEST_SET_PORT", "8080");
        let port: u16 = try_load("RIDEFORYOU_TEST_SET_PORT", "5000").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: "rideforyou.db".to_string(),
            sentry_dsn: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }
}
