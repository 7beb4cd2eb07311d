//! Error types for yql-suggest
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors with clear error chains.
//!
//! Suggestion generators never return these: a failed catalog lookup is
//! logged and degrades to an empty category. The errors below surface only
//! from the catalog client itself, configuration loading and the CLI.

use std::io;

/// Main error type for yql-suggest
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// Catalog lookup errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Parser context could not be decoded
    #[error("Invalid parser context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Catalog lookup (viewer API) errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request could not be sent or completed
    #[error("Request failed: {0}")]
    Request(String),

    /// The viewer did not answer within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The viewer answered with a non-success HTTP status
    #[error("Viewer returned HTTP {0}")]
    Status(u16),

    /// The response body was not a valid autocomplete payload
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The configured endpoint cannot be turned into a request URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Config file not found
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read the config file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status(status.as_u16())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

/// Specialized Result type for yql-suggest operations
pub type Result<T> = std::result::Result<T, SuggestError>;

/// Specialized Result type for catalog lookups
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
