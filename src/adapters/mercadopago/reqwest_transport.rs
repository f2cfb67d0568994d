//! `HttpTransport` backed by a pooled `reqwest::Client`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::ports::{HttpTransport, InboundResponse, OutboundRequest, TransportError};

/// Network transport used in production.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates a transport, applying `timeout` to every outbound request.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Maps a reqwest failure, stripping the URL (its query carries secrets).
    fn classify(&self, err: reqwest::Error) -> TransportError {
        let err = err.without_url();
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<InboundResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::Other(e.to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .query(&request.query);

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        Ok(InboundResponse::new(status, body.to_vec()))
    }
}
