//! Viewer endpoint configuration
//!
//! Parses the base URL of a database node's viewer HTTP API
//! (`http://host:8765`) and builds the autocomplete request URL from it.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default monitoring port of a database node
pub const DEFAULT_VIEWER_PORT: u16 = 8765;

const AUTOCOMPLETE_PATH: &str = "/viewer/json/autocomplete";

/// Transport scheme of the viewer API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

/// Location of a viewer HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerEndpoint {
    #[serde(default)]
    pub scheme: Scheme,

    /// Node host
    pub host: String,

    /// Node monitoring port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix when the viewer sits behind a proxy (e.g. `/node/42`)
    #[serde(default)]
    pub base_path: String,
}

fn default_port() -> u16 {
    DEFAULT_VIEWER_PORT
}

impl ViewerEndpoint {
    /// Parse an `http://` or `https://` URL into a ViewerEndpoint
    pub fn from_url(url: &str) -> ConfigResult<Self> {
        // http://host:port/base/path
        let url = url.trim();
        let (scheme, rest) = if let Some(rest) = url.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else if let Some(rest) = url.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else {
            return Err(ConfigError::Invalid(
                "Endpoint must start with http:// or https://".into(),
            ));
        };

        let (host_port, base_path) = match rest.split_once('/') {
            Some((hp, path)) => (hp, path.trim_end_matches('/')),
            None => (rest, ""),
        };

        let (host, port) = if let Some((h, p)) = host_port.rsplit_once(':') {
            let port = p
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("Invalid port: {}", p)))?;
            (h, port)
        } else {
            (host_port, DEFAULT_VIEWER_PORT)
        };

        if host.is_empty() {
            return Err(ConfigError::Invalid("Endpoint must contain a host".into()));
        }

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            base_path: if base_path.is_empty() {
                String::new()
            } else {
                format!("/{}", base_path)
            },
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> String {
        let scheme = match self.scheme {
            Scheme::Http => "http",
            Scheme::Https => "https",
        };
        format!("{}://{}:{}{}", scheme, self.host, self.port, self.base_path)
    }

    /// Full URL of the autocomplete handler
    pub fn autocomplete_url(&self) -> String {
        format!("{}{}", self.base_url(), AUTOCOMPLETE_PATH)
    }

    /// Get the config directory path (~/.yql-suggest/)
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".yql-suggest"))
    }
}

impl Default for ViewerEndpoint {
    fn default() -> Self {
        Self {
            scheme: Scheme::Http,
            host: "localhost".to_string(),
            port: DEFAULT_VIEWER_PORT,
            base_path: String::new(),
        }
    }
}

impl fmt::Display for ViewerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url())
    }
}
