//! CheckoutService - adapts caller-shaped arguments to gateway calls.
//!
//! The HTTP layer speaks in plain strings; the gateway speaks in domain
//! types. Errors are returned exactly as the gateway produced them.

use std::sync::Arc;

use crate::domain::checkout::{Credentials, Preference};
use crate::ports::{GatewayError, PaymentGateway};

/// Service fronting the payment gateway.
pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String, GatewayError> {
        let credentials = Credentials::new(client_id, client_secret);
        self.gateway.get_access_token(&credentials).await
    }

    pub async fn create_preference(
        &self,
        access_token: &str,
        preference: &Preference,
    ) -> Result<String, GatewayError> {
        self.gateway.create_preference(access_token, preference).await
    }

    pub async fn get_total_payments(
        &self,
        access_token: &str,
        status: Option<&str>,
    ) -> Result<u64, GatewayError> {
        self.gateway.get_total_payments(access_token, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<String>>,
        fail_with_status: Option<u16>,
    }

    impl RecordingGateway {
        fn failing(status: u16) -> Self {
            Self {
                fail_with_status: Some(status),
                ..Default::default()
            }
        }

        fn record(&self, call: String) -> Result<(), GatewayError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with_status {
                Some(status) => Err(GatewayError::provider(status, "provider said no")),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn get_access_token(
            &self,
            credentials: &Credentials,
        ) -> Result<String, GatewayError> {
            self.record(format!(
                "token:{}:{}",
                credentials.client_id(),
                credentials.client_secret()
            ))?;
            Ok("TOKEN".to_string())
        }

        async fn create_preference(
            &self,
            access_token: &str,
            preference: &Preference,
        ) -> Result<String, GatewayError> {
            self.record(format!(
                "preference:{}:{}",
                access_token,
                preference.auto_return
            ))?;
            Ok("https://checkout.test/1".to_string())
        }

        async fn get_total_payments(
            &self,
            access_token: &str,
            status: Option<&str>,
        ) -> Result<u64, GatewayError> {
            self.record(format!(
                "total:{}:{}",
                access_token,
                status.unwrap_or("-")
            ))?;
            Ok(9)
        }
    }

    #[tokio::test]
    async fn get_access_token_builds_credentials() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = CheckoutService::new(gateway.clone());

        let token = service.get_access_token("id", "secret").await.unwrap();

        assert_eq!(token, "TOKEN");
        assert_eq!(*gateway.calls.lock().unwrap(), vec!["token:id:secret"]);
    }

    #[tokio::test]
    async fn create_preference_forwards_token_and_payload() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = CheckoutService::new(gateway.clone());
        let preference = Preference {
            auto_return: true,
            ..Default::default()
        };

        let url = service.create_preference("TOKEN", &preference).await.unwrap();

        assert_eq!(url, "https://checkout.test/1");
        assert_eq!(*gateway.calls.lock().unwrap(), vec!["preference:TOKEN:true"]);
    }

    #[tokio::test]
    async fn get_total_payments_forwards_status() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = CheckoutService::new(gateway.clone());

        let total = service
            .get_total_payments("TOKEN", Some("approved"))
            .await
            .unwrap();

        assert_eq!(total, 9);
        assert_eq!(*gateway.calls.lock().unwrap(), vec!["total:TOKEN:approved"]);
    }

    #[tokio::test]
    async fn gateway_errors_pass_through_unchanged() {
        let service = CheckoutService::new(Arc::new(RecordingGateway::failing(403)));

        let err = service.get_access_token("id", "secret").await.unwrap_err();

        assert_eq!(err.provider_status(), Some(403));
        assert_eq!(err.to_string(), "provider said no");
    }
}
