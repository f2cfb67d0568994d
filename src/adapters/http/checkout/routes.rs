//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_preference, get_access_token, get_total_payments, ping, CheckoutAppState,
};

/// Create the checkout API routes.
///
/// # Routes
///
/// - `GET /ping` - Liveness probe
/// - `GET /access_token` - Exchange client credentials for an access token
/// - `POST /preferences` - Create a checkout preference (token in `access_token` header)
/// - `GET /total_payments` - Count payments, optionally filtered by status
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/access_token", get(get_access_token))
        .route("/preferences", post(create_preference))
        .route("/total_payments", get(get_total_payments))
}

/// Build the complete, state-bound service router with request tracing.
///
/// # Example
///
/// ```ignore
/// let state = CheckoutAppState::new(Arc::new(gateway));
/// let app = checkout_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn checkout_router(state: CheckoutAppState) -> Router {
    checkout_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
