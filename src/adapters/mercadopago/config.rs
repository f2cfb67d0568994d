//! MercadoPago API configuration.

/// Default MercadoPago API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// MercadoPago API configuration.
#[derive(Debug, Clone)]
pub struct MercadoPagoConfig {
    /// Base URL for the API (default: https://api.mercadopago.com).
    api_base_url: String,
}

impl MercadoPagoConfig {
    /// Create a configuration pointing at the public API.
    pub fn new() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (for testing or a sandbox proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Absolute URL for `path` (which must start with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

impl Default for MercadoPagoConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_uses_public_api() {
        let config = MercadoPagoConfig::new();
        assert_eq!(
            config.endpoint("/oauth/token"),
            "https://api.mercadopago.com/oauth/token"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = MercadoPagoConfig::new().with_base_url("http://localhost:9090/");
        assert_eq!(
            config.endpoint("/v1/payments/search"),
            "http://localhost:9090/v1/payments/search"
        );
    }
}
