//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server address, and the asset version advertised to the
//! page bridge.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub database_url: String,
    /// Asset version forwarded to the page bridge; absent means clients are
    /// never forced to reload.
    pub asset_version: Option<String>,
}

impl AppConfig {
    /// Load settings from an optional `config.toml` next to the binary,
    /// overridden by `EVALDESK_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("http_host", "127.0.0.1")?
            .set_default("http_port", 3000_i64)?
            .set_default("database_url", "sqlite:evaldesk.db")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("EVALDESK"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::Message(
                "http_port must be a non-zero port number".to_string(),
            ));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so the env-dependent assertions
    // live in one test instead of racing across threads.
    #[test]
    fn defaults_load_and_env_overrides_win() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.http_host, "127.0.0.1");
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.database_url, "sqlite:evaldesk.db");
        assert_eq!(config.asset_version, None);

        std::env::set_var("EVALDESK_HTTP_PORT", "8080");
        std::env::set_var("EVALDESK_ASSET_VERSION", "build-42");
        let overridden = AppConfig::load().unwrap();
        std::env::remove_var("EVALDESK_HTTP_PORT");
        std::env::remove_var("EVALDESK_ASSET_VERSION");

        assert_eq!(overridden.http_port, 8080);
        assert_eq!(overridden.asset_version.as_deref(), Some("build-42"));
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = AppConfig {
            http_host: "127.0.0.1".to_string(),
            http_port: 0,
            database_url: "sqlite:evaldesk.db".to_string(),
            asset_version: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let config = AppConfig {
            http_host: "127.0.0.1".to_string(),
            http_port: 3000,
            database_url: "  ".to_string(),
            asset_version: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            http_host: "0.0.0.0".to_string(),
            http_port: 9000,
            database_url: "sqlite:evaldesk.db".to_string(),
            asset_version: None,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
