//! Application layer.
//!
//! Orchestrates calls between the HTTP adapters and the ports. The checkout
//! service holds no business rules of its own; it adapts parameters and
//! forwards to the payment gateway.

mod checkout_service;

pub use checkout_service::CheckoutService;
