//! Process configuration loaded from environment variables.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no {0} in env")]
    Missing(&'static str),

    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    Sqlite,
    Postgresql,
}

impl FromStr for DatabaseProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(DatabaseProvider::Sqlite),
            "postgresql" => Ok(DatabaseProvider::Postgresql),
            other => Err(ConfigError::Invalid {
                key: "DATABASE_PROVIDER",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub database_url: String,
    pub database_provider: DatabaseProvider,
    /// Insert seed data on startup.
    pub seed_data: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file is read first: the path in `DOTENV_CONFIG_PATH` if set
    /// (and then it must exist), otherwise `.env` in the working directory if
    /// present. Variables already in the environment win.
    ///
    /// | Env Var             | Default       |
    /// |---------------------|---------------|
    /// | `DATABASE_URL`      | required      |
    /// | `DATABASE_PROVIDER` | required      |
    /// | `SEED_DATA`         | `false`       |
    /// | `LOG_FILTER`        | `info`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("DOTENV_CONFIG_PATH") {
            Ok(path) => {
                dotenvy::from_path(Path::new(&path)).map_err(|e| ConfigError::EnvFile {
                    path,
                    message: e.to_string(),
                })?;
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_provider: DatabaseProvider = non_empty("DATABASE_PROVIDER")
            .ok_or(ConfigError::Missing("DATABASE_PROVIDER"))?
            .trim()
            .parse()?;
        let seed_data = match non_empty("SEED_DATA") {
            Some(value) => parse_flag("SEED_DATA", &value)?,
            None => false,
        };
        let log_filter = non_empty("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            database_url,
            database_provider,
            seed_data,
            log_filter,
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
