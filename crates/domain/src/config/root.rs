use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;
use std::path::Path;

use super::{
    AuthConfig, CacheConfig, ConfigError, GuardConfig, LoggingConfig, MenuSourceConfig,
    ServerConfig, UserEntry,
};
use crate::validators::validate_label;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub guard: GuardConfig,

    #[serde(default)]
    pub menus: MenuSourceConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (defaults when `None`) and apply CLI
    /// overrides. Does not validate; call [`Config::validate`] afterwards.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than zero".to_string(),
            ));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.bind_address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        self.guard.validate().map_err(ConfigError::Validation)?;

        if let Some(upstream) = &self.menus.upstream_url {
            let parsed = url::Url::parse(upstream).map_err(|e| {
                ConfigError::Validation(format!("menus.upstream_url '{upstream}': {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "menus.upstream_url must use http or https: {upstream}"
                )));
            }
        }

        let mut user_ids = HashSet::new();
        for user in &self.users {
            if user.id.trim().is_empty() {
                return Err(ConfigError::Validation("user id cannot be empty".to_string()));
            }
            if !user_ids.insert(user.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate user id: {}",
                    user.id
                )));
            }
            for label in &user.labels {
                validate_label(label)
                    .map_err(|e| ConfigError::Validation(format!("user {}: {e}", user.id)))?;
            }
        }

        for session in &self.auth.sessions {
            if session.token.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "session token cannot be empty".to_string(),
                ));
            }
            if !user_ids.contains(session.user_id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "session references unknown user: {}",
                    session.user_id
                )));
            }
        }

        Ok(())
    }
}
