use crate::error::{LeagueError, Result};
use dashmap::DashMap;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

pub const HOST_KEY: &str = "LEAGUE_HOST";
pub const PORT_KEY: &str = "LEAGUE_PORT";
pub const DEFAULT_LOCALE_KEY: &str = "LEAGUE_DEFAULT_LOCALE";
pub const LOG_KEY: &str = "LEAGUE_LOG";

/// Configuration service
///
/// A flat key/value store. [`ConfigService::from_env`] seeds it from the
/// process environment; tests build it up with [`ConfigService::set`].
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Typed view over [`ConfigService`] with the application's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_locale: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_locale: "en".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();
        let port = match config.get(PORT_KEY) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| LeagueError::Config {
                message: format!("{PORT_KEY}='{raw}' is not a valid port: {e}"),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: config.get_or(HOST_KEY, &defaults.host),
            port,
            default_locale: config.get_or(DEFAULT_LOCALE_KEY, &defaults.default_locale),
            log_level: config.get_or(LOG_KEY, &defaults.log_level),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| LeagueError::Config {
                message: format!("invalid listen address {}:{}: {e}", self.host, self.port),
            })
    }
}
