//! Daemon settings.
//!
//! Read from an optional `covid19.toml` in the working directory, then
//! overridden from the environment. Every key is optional.

use std::net::SocketAddr;
use std::str::FromStr;

use serde::Deserialize;

const CONFIG_FILE: &str = "covid19.toml";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Socket the HTTP server listens on.
    pub listen: SocketAddr,
    /// `SQLite` connection URL.
    pub database_url: String,
    /// Pool cap; the storage layer expects a single connection.
    pub max_connections: u32,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            database_url: "sqlite:covid19India.db?mode=rwc".to_string(),
            max_connections: 1,
            log_filter: "covid19d=info,covid19=info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Load `covid19.toml` (when present) and apply the process environment.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, when an override does not
    /// parse, or when the result is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        config.override_with(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `COVID19_LISTEN`, `COVID19_DATABASE_URL`,
    /// `COVID19_MAX_CONNECTIONS` and `RUST_LOG` as returned by `lookup`.
    fn override_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(listen) = parse_var(&lookup, "COVID19_LISTEN")? {
            self.listen = listen;
        }
        if let Some(url) = lookup("COVID19_DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(max) = parse_var(&lookup, "COVID19_MAX_CONNECTIONS")? {
            self.max_connections = max;
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.port() == 0 {
            return Err(ConfigError::Invalid("listen port must be non-zero"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid("max_connections must be non-zero"));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| value.parse().map_err(|_| ConfigError::Env { name, value }))
        .transpose()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read covid19.toml")]
    Io(#[source] std::io::Error),
    #[error("failed to parse covid19.toml")]
    Parse(#[from] toml::de::Error),
    #[error("cannot parse {name}={value:?}")]
    Env { name: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
