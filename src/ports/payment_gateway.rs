//! Payment gateway port.
//!
//! Defines the contract for talking to the payment provider: one method per
//! provider operation, each performing exactly one outbound call.
//!
//! # Design
//!
//! - **No retries**: a transport failure or provider 5xx is surfaced as-is
//! - **Raw provider errors**: a provider failure keeps the provider's status
//!   code and body text untouched so callers can pass them through

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::{Credentials, Preference};

use super::http_transport::TransportError;

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange client credentials for an access token.
    async fn get_access_token(&self, credentials: &Credentials) -> Result<String, GatewayError>;

    /// Create a checkout preference.
    ///
    /// Returns the hosted checkout URL.
    async fn create_preference(
        &self,
        access_token: &str,
        preference: &Preference,
    ) -> Result<String, GatewayError>;

    /// Count payments, optionally filtered by status.
    async fn get_total_payments(
        &self,
        access_token: &str,
        status: Option<&str>,
    ) -> Result<u64, GatewayError>;
}

/// Errors from payment gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider answered with status >= 400.
    ///
    /// Displays as the raw response body.
    #[error("{message}")]
    Provider { status_code: u16, message: String },

    /// A successful provider response did not have the expected shape.
    #[error("couldn't decode provider response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("couldn't encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// No response was received.
    #[error("couldn't reach provider: {0}")]
    Transport(#[from] TransportError),
}

impl GatewayError {
    /// Create a provider error from a failed response.
    pub fn provider(status_code: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status_code,
            message: message.into(),
        }
    }

    /// The provider's status code, if this error came from a provider response.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            Self::Provider { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn provider_error_displays_raw_body() {
        let err = GatewayError::provider(500, r#"{"error": "internal server error"}"#);
        assert_eq!(err.to_string(), r#"{"error": "internal server error"}"#);
        assert_eq!(err.provider_status(), Some(500));
    }

    #[test]
    fn non_provider_errors_have_no_status() {
        let decode = serde_json::from_str::<String>("1").unwrap_err();
        let err = GatewayError::Decode(decode);
        assert_eq!(err.provider_status(), None);
        assert!(err.to_string().starts_with("couldn't decode provider response: "));

        let err: GatewayError = TransportError::Connect("refused".to_string()).into();
        assert_eq!(err.provider_status(), None);
        assert_eq!(
            err.to_string(),
            "couldn't reach provider: connection failed: refused"
        );
    }
}
