// # HTTP Transport Trait
//
// Defines the single operation the update client needs from an HTTP stack.
//
// ## Implementations
//
// - reqwest: `ReqwestTransport` in the `dynu-client` crate
// - Tests: recording doubles that return canned bodies
//
// ## Usage
//
// ```rust,ignore
// use dynu_core::{HttpTransport, Response};
//
// let response = transport.send(&request).await?;
// let parsed = Response::from_bytes(&response.body)?;
// ```

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use url::Url;

/// Query key carrying the hashed password
pub const PASSWORD_PARAM: &str = "password";

/// Placeholder substituted for the password in logged URLs
const REDACTED: &str = "REDACTED";

/// An outbound update request
///
/// Always an HTTP GET; every parameter travels in the URL query.
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    url: Url,
}

impl UpdateRequest {
    /// Create a GET request for a fully built URL
    pub fn get(url: Url) -> Self {
        Self { url }
    }

    /// HTTP method of the request
    pub fn method(&self) -> &'static str {
        "GET"
    }

    /// Full URL including the query string
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Decoded value of a query parameter
    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Decoded query parameters in wire order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// The URL with the password parameter masked, safe for logs
    pub fn redacted_url(&self) -> String {
        let pairs = self.query_pairs();
        let mut url = self.url.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs.iter().map(|(k, v)| {
            if k == PASSWORD_PARAM {
                (k.as_str(), REDACTED)
            } else {
                (k.as_str(), v.as_str())
            }
        }));
        url.to_string()
    }
}

// The URL holds a credential; Debug shows the redacted form only
impl fmt::Debug for UpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRequest")
            .field("method", &self.method())
            .field("url", &self.redacted_url())
            .finish()
    }
}

/// A fully read HTTP response
///
/// The body is owned, so the underlying connection has already been
/// released by the transport when this value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Complete response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transports
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The update client adds no locking
/// of its own, so concurrent `update` calls on one client are exactly as safe
/// as concurrent `send` calls on its transport.
///
/// # Responsibilities
///
/// - Execute exactly one request per call
/// - Read the body completely, whatever the status code
/// - Own timeouts and cancellation
///
/// The transport must NOT retry. Retry policy belongs to the caller, guided
/// by [`crate::UpdateError::is_temporary`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the full response
    ///
    /// # Returns
    ///
    /// - `Ok(TransportResponse)`: Any HTTP response, including non-2xx
    /// - `Err(Error::Transport)`: The request could not be completed
    async fn send(&self, request: &UpdateRequest) -> Result<TransportResponse>;

    /// Name of the transport (for logging/debugging)
    fn transport_name(&self) -> &'static str {
        "custom"
    }
}
