//! MercadoPago payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for the MercadoPago REST API:
//! - Client-credentials token exchange (`POST /oauth/token`)
//! - Checkout preferences (`POST /checkout/preferences`)
//! - Payment search counts (`GET /v1/payments/search`)
//!
//! # Configuration
//!
//! ```ignore
//! let transport = ReqwestTransport::new(Some(Duration::from_secs(10)))?;
//! let gateway = MercadoPagoGateway::new(MercadoPagoConfig::new(), Arc::new(transport));
//! ```

mod config;
mod gateway;
mod reqwest_transport;
mod responses;

pub use config::{MercadoPagoConfig, DEFAULT_BASE_URL};
pub use gateway::MercadoPagoGateway;
pub use reqwest_transport::ReqwestTransport;
