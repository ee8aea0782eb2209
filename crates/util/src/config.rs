use std::{env, net::SocketAddr, str::FromStr};

use thiserror::Error;

use super::server_bind_address;

pub const ENV_VAR: &str = "EMOJUMP_ENV";
pub const METRICS_VAR: &str = "EMOJUMP_METRICS";

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Returns the canonical name used for logging/metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    pub metrics_enabled: bool,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());
        let environment = env_value.parse()?;
        let bind_addr = server_bind_address()?;
        let metrics_enabled = match env::var(METRICS_VAR) {
            Ok(raw) => parse_flag(&raw)?,
            Err(_) => true,
        };

        Ok(Self {
            bind_addr,
            environment,
            metrics_enabled,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: METRICS_VAR,
            value: raw.to_string(),
        }),
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("EMOJUMP_ENV must be one of 'development', 'production', or 'test' (got {0})")]
    InvalidEnvironment(String),
    #[error("invalid EMOJUMP_BIND_ADDR value: {0}")]
    BindAddress(#[from] std::net::AddrParseError),
    #[error("{var} must be a boolean flag (got {value})")]
    InvalidFlag { var: &'static str, value: String },
}

#[cfg(test)]
pub(crate) static ENV_GUARD: std::sync::LazyLock<std::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(()));
