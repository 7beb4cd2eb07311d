//! User settings and preferences
//!
//! Manages settings stored in ~/.yql-suggest/config.toml

use crate::config::ViewerEndpoint;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Maximum number of entities requested per catalog lookup
pub const DEFAULT_LOOKUP_LIMIT: usize = 1000;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: ViewerEndpoint,

    /// Database path every lookup is scoped to (e.g. `/Root/db`)
    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_lookup_limit")]
    pub entity_limit: usize,

    #[serde(default = "default_lookup_limit")]
    pub column_limit: usize,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Session token sent as `Authorization` header
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

fn default_database() -> String {
    "/local".to_string()
}

fn default_lookup_limit() -> usize {
    DEFAULT_LOOKUP_LIMIT
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: ViewerEndpoint::default(),
            database: default_database(),
            entity_limit: default_lookup_limit(),
            column_limit: default_lookup_limit(),
            timeout_ms: default_timeout_ms(),
            token: None,
        }
    }
}

impl Settings {
    /// Per-request timeout for catalog lookups
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject values no lookup could work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".into()));
        }
        if self.entity_limit == 0 || self.column_limit == 0 {
            return Err(ConfigError::Invalid("lookup limits must be positive".into()));
        }
        Ok(())
    }
}

/// Load settings from the default config file
pub fn load_settings() -> ConfigResult<Settings> {
    let path = ViewerEndpoint::config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_settings_from(&path)
}

/// Load settings from an explicit path; a missing file is an error here
pub fn load_settings_from(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}
