//! Payment provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::mercadopago::DEFAULT_BASE_URL;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Outbound provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider API root, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate provider configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let is_https = self.base_url.starts_with("https://");
        if !is_https && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if production && !is_https {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
