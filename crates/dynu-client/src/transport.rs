//! reqwest-backed [`HttpTransport`]
//!
//! Sends the request once, reads the whole body whatever the status, and
//! returns. No retries, no caching. The hashed password never appears in
//! logs; URLs are logged in redacted form only.

use async_trait::async_trait;
use dynu_core::{Error, HttpTransport, Result, TransportResponse, UpdateRequest};
use std::time::Duration;

/// Default HTTP timeout for update requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request
const USER_AGENT: &str = concat!("dynu-client/", env!("CARGO_PKG_VERSION"));

/// Default transport built on `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Use a caller-built client (proxies, TLS settings, deadlines, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &UpdateRequest) -> Result<TransportResponse> {
        tracing::debug!("GET {}", request.redacted_url());

        let response = self
            .client
            .get(request.url().clone())
            .send()
            .await
            .map_err(|e| Error::transport(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Update endpoint answered with HTTP status {}", status);
        }

        // Consumes the response, releasing the connection once the body is read
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e.without_url())))?;

        Ok(TransportResponse::new(status.as_u16(), body.to_vec()))
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}
