//! The update client
//!
//! One `update` call is one GET request: build the URL from the
//! configuration and the caller's addresses, hand it to the transport, parse
//! the body, turn failing records into [`ResponseErrors`].
//!
//! The client never retries, sleeps or schedules. Callers decide what to do
//! with each failure using [`dynu_core::UpdateError::is_temporary`].

use crate::request::{build_request, build_request_for, ReportedAddresses};
use crate::transport::ReqwestTransport;
use dynu_core::{
    ClientConfig, Error, HttpTransport, Logger, Response, ResponseErrors, Result, UpdateRequest,
};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use url::Url;

/// Client for the Dynu IP update API
///
/// # Thread Safety
///
/// `DynuClient` is `Send + Sync` and holds no per-call state, so one instance
/// can serve concurrent `update` calls as long as its transport can.
///
/// # Security
///
/// The Debug implementation does NOT expose the password.
pub struct DynuClient {
    /// Identity, targeting and address families
    config: ClientConfig,

    /// Parsed form of `config.endpoint()`
    endpoint: Url,

    /// Injected HTTP capability
    transport: Arc<dyn HttpTransport>,

    /// Optional extra log sink
    logger: Option<Arc<dyn Logger>>,
}

impl DynuClient {
    /// Create a client with default settings and the reqwest transport
    ///
    /// Defaults: IPv4 reporting on, IPv6 off, records identified by username.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(username, password))
    }

    /// Create a client from a configuration, using the reqwest transport
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)`: If the configuration is invalid (e.g. malformed endpoint)
    /// - `Err(Error::Transport)`: If the HTTP client cannot be built
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client with a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint_url()?;

        Ok(Self {
            config,
            endpoint,
            transport,
            logger: None,
        })
    }

    /// Attach a logger that receives every diagnostic message
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Replace the transport
    pub fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    /// Replace or remove the logger
    pub fn set_logger(&mut self, logger: Option<Arc<dyn Logger>>) {
        self.logger = logger;
    }

    /// Change the configuration
    ///
    /// The change is applied to a copy and only committed if the result
    /// validates, so a failed call leaves the client untouched.
    ///
    /// ```rust,ignore
    /// client.reconfigure(|config| {
    ///     config.set_location("office");
    ///     config.set_ipv6(true);
    /// })?;
    /// ```
    pub fn reconfigure<F>(&mut self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut ClientConfig),
    {
        let mut config = self.config.clone();
        apply(&mut config);
        config.validate()?;
        self.endpoint = config.endpoint_url()?;
        self.config = config;
        Ok(())
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request an update with these addresses would send
    pub fn build_request(&self, addresses: &[IpAddr]) -> UpdateRequest {
        build_request(&self.config, &self.endpoint, addresses)
    }

    /// Send an update and return the parsed response without classifying it
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: The server answered; records may still report failures
    /// - `Err(Error::Transport)`: The request could not be completed
    /// - `Err(Error::Decode)`: The body was not text
    pub async fn send_update(&self, addresses: &[IpAddr]) -> Result<Response> {
        let reported = ReportedAddresses::select(addresses, self.config.ipv4(), self.config.ipv6());
        let request = build_request_for(&self.config, &self.endpoint, &reported);

        tracing::debug!(
            transport = self.transport.transport_name(),
            "Sending update: {}",
            request.redacted_url()
        );
        self.log(format_args!(
            "dynu: updating myip={} myipv6={} via {}",
            reported.myip(),
            reported.myipv6(),
            request.redacted_url()
        ));

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Update request failed: {}", e);
                self.log(format_args!("dynu: request failed: {}", e));
                return Err(e);
            }
        };

        let status = response.status;
        let parsed = Response::from_bytes(&response.body)?;

        tracing::debug!(
            "Received {} record(s) with HTTP status {}",
            parsed.len(),
            status
        );
        self.log(format_args!(
            "dynu: HTTP {} with {} record(s)",
            status,
            parsed.len()
        ));

        Ok(parsed)
    }

    /// Report the given addresses to the registrar
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Every record was `good` or `nochg`
    /// - `Err(Error::Update)`: One or more records failed; inspect each entry
    ///   with [`Error::update_errors`]
    /// - `Err(_)`: Transport or decode failure, not retried here
    pub async fn update(&self, addresses: &[IpAddr]) -> Result<()> {
        let response = self.send_update(addresses).await?;

        match response.to_error() {
            None => {
                tracing::info!("Update accepted ({} record(s))", response.len());
                self.log(format_args!("dynu: update accepted"));
                Ok(())
            }
            Some(errors) => {
                self.report_failures(&errors);
                Err(Error::Update(errors))
            }
        }
    }

    fn report_failures(&self, errors: &ResponseErrors) {
        for error in errors {
            if error.is_temporary() {
                tracing::warn!(
                    request = error.request(),
                    "Temporary update failure: {}",
                    error
                );
            } else {
                tracing::error!(request = error.request(), "Update failure: {}", error);
            }
        }
        self.log(format_args!("{}", errors));
    }

    fn log(&self, message: fmt::Arguments<'_>) {
        if let Some(logger) = &self.logger {
            logger.log(message);
        }
    }
}

// Custom Debug implementation that hides the password
impl fmt::Debug for DynuClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynuClient")
            .field("config", &self.config)
            .field("transport", &self.transport.transport_name())
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
