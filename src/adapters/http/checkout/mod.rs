//! HTTP adapter for checkout endpoints.
//!
//! Exposes the checkout service via a plain-text REST API:
//! - `GET /ping` - Liveness probe
//! - `GET /access_token` - Exchange client credentials for an access token
//! - `POST /preferences` - Create a checkout preference
//! - `GET /total_payments` - Count payments by status

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CallerAccessToken, CheckoutApiError, CheckoutAppState, Operation};
pub use routes::{checkout_router, checkout_routes};
