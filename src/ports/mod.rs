//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - Provider operations (token, preference, payment search)
//! - `HttpTransport` - A single outbound HTTP round trip

mod http_transport;
mod payment_gateway;

pub use http_transport::{HttpTransport, InboundResponse, OutboundRequest, TransportError};
pub use payment_gateway::{GatewayError, PaymentGateway};
