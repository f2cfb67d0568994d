//! HTTP handlers for checkout endpoints.
//!
//! These handlers validate the request shape, call the checkout service and
//! render every outcome as a plain-text response. Status codes are decided in
//! exactly one place: `CheckoutApiError::status`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::CheckoutService;
use crate::domain::checkout::{Preference, ValidationErrors};
use crate::ports::{GatewayError, PaymentGateway};

use super::dto::{AccessTokenQuery, QueryPairs, TotalPaymentsQuery, ACCESS_TOKEN_HEADER};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned for each request; holds nothing mutable.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub service: Arc<CheckoutService>,
}

impl CheckoutAppState {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            service: Arc::new(CheckoutService::new(gateway)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Caller Access Token
// ════════════════════════════════════════════════════════════════════════════════

/// Provider access token supplied by the caller in the `access_token` header.
#[derive(Debug, Clone)]
pub struct CallerAccessToken(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CallerAccessToken
where
    S: Send + Sync,
{
    type Rejection = CheckoutApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| CallerAccessToken(token.to_string()))
            .ok_or(CheckoutApiError::AccessTokenRequired)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /ping - Liveness probe
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /access_token?client_id=&client_secret= - Exchange client credentials
pub async fn get_access_token(
    State(state): State<CheckoutAppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<String, CheckoutApiError> {
    let (client_id, client_secret) = required_credentials(AccessTokenQuery::from_pairs(&pairs))?;

    state
        .service
        .get_access_token(&client_id, &client_secret)
        .await
        .map_err(|e| CheckoutApiError::gateway(Operation::GetAccessToken, e))
}

/// POST /preferences - Create a checkout preference, returning its URL
pub async fn create_preference(
    State(state): State<CheckoutAppState>,
    CallerAccessToken(access_token): CallerAccessToken,
    body: Bytes,
) -> Result<String, CheckoutApiError> {
    let preference: Preference = serde_json::from_slice(&body)
        .map_err(|e| CheckoutApiError::UndecodableBody(e.to_string()))?;

    preference.validate().map_err(CheckoutApiError::Validation)?;

    state
        .service
        .create_preference(&access_token, &preference)
        .await
        .map_err(|e| CheckoutApiError::gateway(Operation::CreateCheckout, e))
}

/// GET /total_payments?status= - Count payments with the given status
pub async fn get_total_payments(
    State(state): State<CheckoutAppState>,
    CallerAccessToken(access_token): CallerAccessToken,
    Query(pairs): Query<QueryPairs>,
) -> Result<String, CheckoutApiError> {
    let query = TotalPaymentsQuery::from_pairs(&pairs);
    let status = query.status.as_deref().filter(|s| !s.is_empty());

    let total = state
        .service
        .get_total_payments(&access_token, status)
        .await
        .map_err(|e| CheckoutApiError::gateway(Operation::GetTotalPayments, e))?;

    Ok(total.to_string())
}

/// Both credentials must be present and non-empty; client id is checked first.
fn required_credentials(query: AccessTokenQuery) -> Result<(String, String), CheckoutApiError> {
    let client_id = query
        .client_id
        .filter(|v| !v.is_empty())
        .ok_or(CheckoutApiError::MissingParameter("client id is required"))?;

    let client_secret = query
        .client_secret
        .filter(|v| !v.is_empty())
        .ok_or(CheckoutApiError::MissingParameter("client secret is required"))?;

    Ok((client_id, client_secret))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Provider operation a gateway error came from; selects the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAccessToken,
    CreateCheckout,
    GetTotalPayments,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::GetAccessToken => "couldn't get access token",
            Operation::CreateCheckout => "couldn't create checkout",
            Operation::GetTotalPayments => "couldn't get total payments",
        }
    }
}

/// API error type that converts every failure into an HTTP response.
#[derive(Debug)]
pub enum CheckoutApiError {
    /// A required query parameter was missing or empty.
    MissingParameter(&'static str),

    /// The caller did not supply an access token.
    AccessTokenRequired,

    /// The request body is not a decodable preference.
    UndecodableBody(String),

    /// The preference decoded but failed required-field rules.
    Validation(ValidationErrors),

    /// The gateway call failed.
    Gateway {
        operation: Operation,
        source: GatewayError,
    },
}

impl CheckoutApiError {
    pub fn gateway(operation: Operation, source: GatewayError) -> Self {
        Self::Gateway { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CheckoutApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            CheckoutApiError::AccessTokenRequired => StatusCode::UNAUTHORIZED,
            CheckoutApiError::UndecodableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CheckoutApiError::Validation(_) => StatusCode::BAD_REQUEST,
            CheckoutApiError::Gateway { source, .. } => gateway_status(source),
        }
    }

    pub fn message(&self) -> String {
        match self {
            CheckoutApiError::MissingParameter(message) => (*message).to_string(),
            CheckoutApiError::AccessTokenRequired => "access token is required".to_string(),
            CheckoutApiError::UndecodableBody(detail) => {
                format!("couldn't decode body: {}", detail)
            }
            CheckoutApiError::Validation(errors) => format!("validation error: {}", errors),
            CheckoutApiError::Gateway { operation, source } => {
                format!("{}: {}", operation.failure_prefix(), source)
            }
        }
    }
}

/// Provider errors keep the provider's status; everything else is a 500.
fn gateway_status(err: &GatewayError) -> StatusCode {
    err.provider_status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self {
            CheckoutApiError::Gateway {
                operation,
                source: GatewayError::Provider { .. },
            } => {
                tracing::debug!(?operation, status = status.as_u16(), "Passing provider error through");
            }
            CheckoutApiError::Gateway { operation, source } => {
                tracing::error!(?operation, error = %source, "Checkout operation failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), reason = %message, "Rejected request");
            }
        }

        (status, message).into_response()
    }
}
