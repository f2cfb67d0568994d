//! HTTP DTOs for checkout endpoints.
//!
//! Request bodies are decoded straight into the domain `Preference`; only
//! query strings need their own shapes. Every response body is plain text.
//!
//! Query strings are extracted as raw key/value pairs and the first
//! occurrence of each key wins, so a repeated key never fails extraction.

/// Header carrying the caller's provider access token.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Raw query pairs in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Query for `GET /access_token`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTokenQuery {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl AccessTokenQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            client_id: first_value(pairs, "client_id"),
            client_secret: first_value(pairs, "client_secret"),
        }
    }
}

/// Query for `GET /total_payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalPaymentsQuery {
    /// Payment status filter (e.g. `approved`); all payments when absent.
    pub status: Option<String>,
}

impl TotalPaymentsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            status: first_value(pairs, "status"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
