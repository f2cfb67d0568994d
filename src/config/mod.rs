//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHECKOUT_GATEWAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use checkout_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod provider;
mod server;

pub use error::{ConfigError, ValidationError};
pub use provider::ProviderConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Platform-provided port variable, honoured ahead of the prefixed setting.
const PORT_OVERRIDE_VAR: &str = "PORT";

/// Root application configuration
///
/// Every field has a default, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment provider configuration (base URL, timeout)
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHECKOUT_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies a bare `PORT` variable over `server.port`
    ///
    /// # Environment Variable Format
    ///
    /// - `CHECKOUT_GATEWAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHECKOUT_GATEWAY__PROVIDER__TIMEOUT_SECS=10` -> `provider.timeout_secs = 10`
    /// - `PORT=:8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    /// or `PORT` is not a port number.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let port_override = match std::env::var(PORT_OVERRIDE_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Some(server::parse_port_override(&raw)?),
            _ => None,
        };

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHECKOUT_GATEWAY")
                    .separator("__"),
            )
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.provider.validate(self.is_production())?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
