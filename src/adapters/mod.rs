//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Axum REST surface for the checkout service
//! - `mercadopago` - MercadoPago REST client behind the `PaymentGateway` port

pub mod http;
pub mod mercadopago;
