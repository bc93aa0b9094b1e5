use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "ACTIVITIES_HOST";
pub const PORT_VAR: &str = "ACTIVITIES_PORT";
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ACTIVITIES_PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("ACTIVITIES_HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(host) if host.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(host) => host.trim().to_string(),
            None => defaults.host,
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let static_dir = lookup(STATIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }
}
