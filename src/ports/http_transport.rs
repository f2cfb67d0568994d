//! HTTP transport port.
//!
//! The smallest capability the payment gateway needs from the network: send
//! one request, get back a status code and the raw body. Production wires a
//! pooled HTTP client behind it; tests substitute a scripted double.

use async_trait::async_trait;
use http::Method;
use thiserror::Error;

/// Port for performing a single outbound HTTP request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns the response, whatever its status code.
    ///
    /// Only failures that prevent a response from being received are errors.
    async fn execute(&self, request: OutboundRequest) -> Result<InboundResponse, TransportError>;
}

/// A request to the provider.
///
/// Query values may carry secrets (client secret, access token); do not log
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,

    /// Absolute URL without query string.
    pub url: String,

    /// Query parameters, sent in order.
    pub query: Vec<(&'static str, String)>,

    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Sets a JSON body.
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// First value of query parameter `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A response from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl InboundResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the provider signalled failure (status >= 400).
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failures that prevented a response from being received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_transport_is_object_safe() {
        fn _accepts_dyn(_transport: &dyn HttpTransport) {}
    }

    #[test]
    fn builder_keeps_query_order_and_body() {
        let request = OutboundRequest::post("https://api.example.com/oauth/token")
            .with_query("client_id", "id")
            .with_query("grant_type", "client_credentials")
            .with_json_body(b"{}".to_vec());

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.query,
            vec![
                ("client_id", "id".to_string()),
                ("grant_type", "client_credentials".to_string()),
            ]
        );
        assert_eq!(request.query_value("grant_type"), Some("client_credentials"));
        assert_eq!(request.query_value("missing"), None);
        assert_eq!(request.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn error_statuses_start_at_400() {
        assert!(!InboundResponse::new(200, "").is_error());
        assert!(!InboundResponse::new(399, "").is_error());
        assert!(InboundResponse::new(400, "").is_error());
        assert!(InboundResponse::new(503, "").is_error());
    }

    #[test]
    fn body_text_is_lossy() {
        let response = InboundResponse::new(500, vec![b'o', b'k', 0xff]);
        assert_eq!(response.body_text(), "ok\u{fffd}");
    }
}
