// src/config.rs
use crate::domain::article::{DEFAULT_PAGE_SIZE, PageSize};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    page_size: PageSize,
    database_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://gamenews.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn positive_u32(key: &str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got {value:?}"
            ))),
        },
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let page_size = positive_u32(
            "ARTICLES_PAGE_SIZE",
            lookup("ARTICLES_PAGE_SIZE"),
            DEFAULT_PAGE_SIZE,
        )?;
        let page_size = PageSize::new(page_size).map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let database_max_connections = positive_u32(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            default_max_connections(),
        )?;

        Ok(Self {
            database_url,
            listen_addr,
            page_size,
            database_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://gamenews.db?mode=rwc");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.page_size().get(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.database_max_connections(), 16);
    }

    #[test]
    fn explicit_values_win() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("LISTEN_ADDR", "0.0.0.0:9000"),
            ("ARTICLES_PAGE_SIZE", "10"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.page_size().get(), 10);
        assert_eq!(config.database_max_connections(), 1);
    }

    #[test]
    fn zero_or_garbage_page_size_is_rejected() {
        assert!(config_from(&[("ARTICLES_PAGE_SIZE", "0")]).is_err());
        assert!(config_from(&[("ARTICLES_PAGE_SIZE", "three")]).is_err());
        assert!(config_from(&[("DATABASE_MAX_CONNECTIONS", "-1")]).is_err());
    }
}
