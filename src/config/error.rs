//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid PORT value: {0}")]
    InvalidPortOverride(String),

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Provider base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Provider base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Provider timeout must be between 1 and 300 seconds")]
    InvalidTimeout,
}
