//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use portal::config::{
    DEFAULT_GAME_BASE_URL, DEFAULT_KEYCLOAK_CLIENT_ID, DEFAULT_KEYCLOAK_REALM, DEFAULT_KEYCLOAK_URL, PortalConfig,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served at `/vendor` (holds `keycloak.js`).
    pub vendor_dir: PathBuf,
    /// Values handed to the browser.
    pub portal: PortalConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional (blank counts as unset):
    /// - `PORT`: default 3000
    /// - `VENDOR_DIR`: default `vendor`
    /// - `KEYCLOAK_URL`: default `http://localhost:8080`
    /// - `KEYCLOAK_REALM`: default `link-wars`
    /// - `KEYCLOAK_CLIENT_ID`: default `link-wars-portal`
    /// - `GAME_BASE_URL`: default `http://localhost:5174`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            vendor_dir: PathBuf::from(value("VENDOR_DIR", DEFAULT_VENDOR_DIR)),
            portal: PortalConfig {
                keycloak_url: value("KEYCLOAK_URL", DEFAULT_KEYCLOAK_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                realm: value("KEYCLOAK_REALM", DEFAULT_KEYCLOAK_REALM),
                client_id: value("KEYCLOAK_CLIENT_ID", DEFAULT_KEYCLOAK_CLIENT_ID),
                game_base_url: value("GAME_BASE_URL", DEFAULT_GAME_BASE_URL),
            },
        })
    }
}
