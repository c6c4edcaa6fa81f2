//! Shared configuration types for the todo services
//!
//! This crate provides the configuration types used by both the API server
//! and the seed tool, so the two entry points read the environment the
//! same way.

mod database;
mod error;
mod log_level;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ConfigResult};
pub use log_level::LogLevel;

use std::env;

/// Common configuration shared between all entry points
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log level parsed from LOG_LEVEL
    pub log_level: LogLevel,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    ///
    /// In production `DATABASE_URL` must be set explicitly; elsewhere the
    /// local development database is used as a fallback.
    pub fn from_env() -> ConfigResult<Self> {
        let environment: Environment = get_env_or_default("ENVIRONMENT", "development")
            .parse()
            .unwrap_or_default();

        if environment.is_production() {
            match env::var("DATABASE_URL") {
                Ok(url) if !url.is_empty() => {}
                _ => return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string())),
            }
        }

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            environment,
            log_level: LogLevel::from_env(),
        })
    }
}

/// Helper function to get an optional environment variable with a default
///
/// A variable that is set but empty counts as unset.
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
