//! Configuration loading and representation.
//!
//! Values come from the process environment (a `.env` file is loaded first when
//! present). Every setting has a default, so a bare `stockroom-api` starts with
//! a database under the user's home directory.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Directory (under the home directory) holding the default database file.
pub const DEFAULT_DATA_DIR: &str = ".stockroom";

/// File name of the default database.
pub const DEFAULT_DATABASE_FILE: &str = "stockroom.db";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("cannot determine home directory; set DATABASE_PATH explicitly")]
    NoHomeDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    /// Private in-memory database (tests, throwaway runs).
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub location: DatabaseLocation,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            max_connections: 1,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DatabaseLocation::File(path.into()),
            max_connections: 5,
        }
    }
}

/// Latest client release advertised by `GET /version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseInfo {
    pub version: String,
    pub download_url: String,
    pub must_update: bool,
}

impl Default for ReleaseInfo {
    fn default() -> Self {
        Self {
            version: "1.0.1".to_string(),
            download_url: "https://example.com/downloads/linux/app-latest.tar.gz".to_string(),
            must_update: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub release: ReleaseInfo,
}

impl AppConfig {
    /// Load from the environment (after reading `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        tracing::info!(
            bind_addr = %config.server.bind_addr(),
            database = ?config.database.location,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "SERVER_PORT", 8080u16)?;

        let location = match lookup("DATABASE_PATH") {
            Some(p) if p == ":memory:" => DatabaseLocation::Memory,
            Some(p) if !p.trim().is_empty() => DatabaseLocation::File(PathBuf::from(p)),
            _ => DatabaseLocation::File(default_database_path()?),
        };
        let max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        let defaults = ReleaseInfo::default();
        let release = ReleaseInfo {
            version: lookup("APP_LATEST_VERSION").unwrap_or(defaults.version),
            download_url: lookup("APP_DOWNLOAD_URL").unwrap_or(defaults.download_url),
            must_update: parse_var(&lookup, "APP_MUST_UPDATE", defaults.must_update)?,
        };

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                location,
                max_connections,
            },
            release,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            var,
            message: e.to_string(),
        }),
    }
}

/// `<home>/.stockroom/stockroom.db`; lives outside the install directory so an
/// application update never replaces the data.
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(DEFAULT_DATA_DIR).join(DEFAULT_DATABASE_FILE))
}
