//! MercadoPago response bodies.
//!
//! Only the fields this service reads are modelled; everything else in the
//! provider's payloads is ignored.

use serde::Deserialize;

/// `POST /oauth/token` success body.
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
}

/// `POST /checkout/preferences` success body.
#[derive(Debug, Deserialize)]
pub(super) struct PreferenceResponse {
    pub init_point: String,
}

/// `GET /v1/payments/search` success body.
#[derive(Debug, Deserialize)]
pub(super) struct PaymentSearchResponse {
    pub paging: Paging,
}

#[derive(Debug, Deserialize)]
pub(super) struct Paging {
    pub total: u64,
}
