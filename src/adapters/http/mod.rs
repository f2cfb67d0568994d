//! HTTP adapters - REST API implementations.

pub mod checkout;

pub use checkout::{checkout_router, CheckoutAppState};
