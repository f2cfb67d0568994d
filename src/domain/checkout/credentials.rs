//! Client credentials for the token exchange.

use secrecy::{ExposeSecret, SecretString};

/// Client id/secret pair used for one token exchange.
///
/// Built per request and dropped with it. The secret stays wrapped in
/// [`SecretString`] so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Exposes the client secret (for building the outbound request).
    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}
