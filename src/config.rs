// src/config.rs

//! Startup configuration.
//!
//! Built once in `main` from environment variables (a `.env` file is loaded
//! first when present) and never mutated afterwards.

use std::env;

use anyhow::Context;
use sqlx::mysql::MySqlConnectOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection string; takes precedence over the discrete fields below.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, applying defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_port = get("SERVER_PORT", "5000");
        let db_port = get("DB_PORT", "3306");
        let max_connections = get("DB_MAX_CONNECTIONS", "5");

        Ok(Self {
            server: ServerConfig {
                host: get("SERVER_HOST", "127.0.0.1"),
                port: server_port
                    .parse()
                    .with_context(|| format!("SERVER_PORT is not a valid port: {}", server_port))?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
                host: get("DB_HOST", "localhost"),
                port: db_port
                    .parse()
                    .with_context(|| format!("DB_PORT is not a valid port: {}", db_port))?,
                user: get("DB_USER", "root"),
                password: get("DB_PASSWORD", ""),
                name: get("DB_NAME", "phantom"),
                max_connections: max_connections.parse().with_context(|| {
                    format!("DB_MAX_CONNECTIONS is not a number: {}", max_connections)
                })?,
            },
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<MySqlConnectOptions> {
        if let Some(url) = &self.url {
            return url.parse().context("DATABASE_URL is not a valid MySQL URL");
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 5000));
        assert_eq!(config.database.url, None);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.name, "phantom");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "8080"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "pulse"),
            ("DB_PASSWORD", "s3cret@pw"),
            ("DB_NAME", "pulse"),
            ("DB_MAX_CONNECTIONS", "20"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 8080));
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.password, "s3cret@pw");
        assert_eq!(config.database.max_connections, 20);
        assert!(config.database.connect_options().is_ok());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("SERVER_PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        assert!(config_from(&[("DB_PORT", "70000")]).is_err());
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "-1")]).is_err());
    }

    #[test]
    fn test_database_url_override() {
        let config = config_from(&[("DATABASE_URL", "mysql://root:pw@127.0.0.1:3307/pulse")]).unwrap();
        assert!(config.database.connect_options().is_ok());

        let config = config_from(&[("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.database.url, None);

        let config = config_from(&[("DATABASE_URL", "not a url")]).unwrap();
        assert!(config.database.connect_options().is_err());
    }
}
