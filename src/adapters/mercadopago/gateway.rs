//! MercadoPago payment gateway.
//!
//! Implements the `PaymentGateway` port on top of any `HttpTransport`.
//! Each operation is a single request/response round trip:
//!
//! - status >= 400 becomes `GatewayError::Provider` with the raw body
//! - a success body that does not decode becomes `GatewayError::Decode`
//! - a failed send becomes `GatewayError::Transport`
//!
//! Nothing is retried. Credentials and tokens travel as query parameters,
//! the preference as a JSON body.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::checkout::{Credentials, Preference};
use crate::ports::{GatewayError, HttpTransport, OutboundRequest, PaymentGateway};

use super::config::MercadoPagoConfig;
use super::responses::{PaymentSearchResponse, PreferenceResponse, TokenResponse};

const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

/// Payments search only needs the paging block, so one result is enough.
const SEARCH_PAGE_LIMIT: &str = "1";
const SEARCH_PAGE_OFFSET: &str = "0";

/// MercadoPago payment gateway.
pub struct MercadoPagoGateway {
    config: MercadoPagoConfig,
    transport: Arc<dyn HttpTransport>,
}

impl MercadoPagoGateway {
    /// Create a gateway sending through `transport`.
    pub fn new(config: MercadoPagoConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Send one request and decode a successful body as `T`.
    async fn round_trip<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: OutboundRequest,
    ) -> Result<T, GatewayError> {
        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::error!(operation, error = %e, "MercadoPago request failed");
            GatewayError::from(e)
        })?;

        if response.is_error() {
            tracing::warn!(
                operation,
                status = response.status,
                "MercadoPago returned an error response"
            );
            return Err(GatewayError::provider(response.status, response.body_text()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!(operation, error = %e, "Failed to parse MercadoPago response");
            GatewayError::Decode(e)
        })
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    async fn get_access_token(&self, credentials: &Credentials) -> Result<String, GatewayError> {
        let request = OutboundRequest::post(self.config.endpoint("/oauth/token"))
            .with_query("client_id", credentials.client_id())
            .with_query("client_secret", credentials.client_secret())
            .with_query("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS);

        let token: TokenResponse = self.round_trip("get_access_token", request).await?;
        Ok(token.access_token)
    }

    async fn create_preference(
        &self,
        access_token: &str,
        preference: &Preference,
    ) -> Result<String, GatewayError> {
        let body = serde_json::to_vec(preference).map_err(GatewayError::Encode)?;

        let request = OutboundRequest::post(self.config.endpoint("/checkout/preferences"))
            .with_query("access_token", access_token)
            .with_json_body(body);

        let created: PreferenceResponse = self.round_trip("create_preference", request).await?;
        Ok(created.init_point)
    }

    async fn get_total_payments(
        &self,
        access_token: &str,
        status: Option<&str>,
    ) -> Result<u64, GatewayError> {
        let mut request = OutboundRequest::get(self.config.endpoint("/v1/payments/search"))
            .with_query("limit", SEARCH_PAGE_LIMIT)
            .with_query("offset", SEARCH_PAGE_OFFSET)
            .with_query("access_token", access_token);

        if let Some(status) = status {
            request = request.with_query("status", status);
        }

        let search: PaymentSearchResponse = self.round_trip("get_total_payments", request).await?;
        Ok(search.paging.total)
    }
}
