//! API server configuration

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use todo_shared_config::{CommonConfig, DatabaseConfig, Environment, LogLevel};

/// Port the GraphQL server listens on unless `PORT` says otherwise
pub const DEFAULT_PORT: u16 = 4000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the seed tool
    pub common: CommonConfig,

    /// Server port (default: 4000)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;

        let port = match env::var("PORT") {
            Ok(value) if !value.is_empty() => value.parse().context("Invalid PORT value")?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { common, port })
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get the configured log level
    pub fn log_level(&self) -> LogLevel {
        self.common.log_level
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }
}
