//! Server configuration: listen address, logging, and seed records.
//!
//! Read from the TOML file named by `TODO_API_CONFIG` when set, otherwise
//! defaults. `HOST` and `PORT` override the `[server]` section.

use std::{env::VarError, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::model::TodoItem;

pub const CONFIG_PATH_VAR: &str = "TODO_API_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: Vec<SeedItem>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// A record inserted into the store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub secret: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `TODO_API_CONFIG` (or defaults), then apply `HOST`/`PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env_var(CONFIG_PATH_VAR, std::env::var(CONFIG_PATH_VAR))?,
            env_var("HOST", std::env::var("HOST"))?,
            env_var("PORT", std::env::var("PORT"))?,
        )
    }

    /// `from_env` with the variable values passed in.
    pub fn from_vars(
        path: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(host, port)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("{port:?}: {e}"),
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host",
                reason: "cannot be empty".into(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be nonzero".into(),
            });
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "cannot be empty".into(),
            });
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected pretty or json, got {}", self.logging.format),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for seed in &self.seed {
            if seed.id <= 0 {
                return Err(ConfigError::InvalidValue {
                    field: "seed.id",
                    reason: format!("{} is not positive", seed.id),
                });
            }
            if !seen.insert(seed.id) {
                return Err(ConfigError::InvalidValue {
                    field: "seed.id",
                    reason: format!("{} appears more than once", seed.id),
                });
            }
        }
        Ok(())
    }

    pub fn seed_items(&self) -> impl Iterator<Item = TodoItem> + '_ {
        self.seed.iter().map(|seed| TodoItem {
            id: seed.id,
            name: seed.name.clone(),
            is_complete: seed.is_complete,
            secret: seed.secret.clone(),
        })
    }
}

/// Unset is `None`; a value that is not valid Unicode is an error rather than
/// being treated as unset.
fn env_var(
    name: &'static str,
    value: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            field: name,
            reason: format!("not valid unicode: {raw:?}"),
        }),
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
