//! Configuration types for the Dynu update client
//!
//! [`ClientConfig`] holds the identity, the targeting mode and the address
//! families to report. Hostname and location targeting are variants of one
//! enum, so at most one of them can be active.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.dynu.com";

/// Path of the update operation, appended to the endpoint
pub const UPDATE_PATH: &str = "/nic/update";

/// Which DNS records an update applies to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Targeting {
    /// Identify the records by account username
    #[default]
    Account,
    /// Update exactly these hostnames
    Hostnames(Vec<String>),
    /// Update every hostname in a location group
    Location(String),
}

impl Targeting {
    /// Hostname targeting; an empty list falls back to [`Targeting::Account`]
    pub fn hostnames<I, S>(hostnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hostnames: Vec<String> = hostnames.into_iter().map(Into::into).collect();
        if hostnames.is_empty() {
            Self::Account
        } else {
            Self::Hostnames(hostnames)
        }
    }

    /// Location targeting; an empty location falls back to [`Targeting::Account`]
    pub fn location(location: impl Into<String>) -> Self {
        let location = location.into();
        if location.is_empty() {
            Self::Account
        } else {
            Self::Location(location)
        }
    }

    /// Validate the targeting
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            Targeting::Hostnames(hostnames) => {
                if hostnames.is_empty() {
                    return Err(crate::Error::config("Hostname list cannot be empty"));
                }
                for hostname in hostnames {
                    if hostname.trim().is_empty() {
                        return Err(crate::Error::config("Hostname cannot be empty"));
                    }
                    if hostname.contains(',') {
                        return Err(crate::Error::config(format!(
                            "Hostname cannot contain a comma: {}",
                            hostname
                        )));
                    }
                }
                Ok(())
            }
            Targeting::Location(location) => {
                if location.is_empty() {
                    return Err(crate::Error::config("Location cannot be empty"));
                }
                Ok(())
            }
            Targeting::Account => Ok(()),
        }
    }
}

/// Client configuration
///
/// # Security
///
/// The Debug implementation does NOT expose the password.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account username
    username: String,

    /// Account password
    /// ⚠️ NEVER log this value
    #[serde(skip_serializing)]
    password: String,

    /// API endpoint; only scheme, host and port are used
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Hostname or location targeting
    #[serde(default)]
    targeting: Targeting,

    /// Report IPv4 addresses
    #[serde(default = "default_ipv4")]
    ipv4: bool,

    /// Report IPv6 addresses
    #[serde(default)]
    ipv6: bool,
}

impl ClientConfig {
    /// Create a configuration with defaults: IPv4 only, account targeting
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            endpoint: default_endpoint(),
            targeting: Targeting::Account,
            ipv4: default_ipv4(),
            ipv6: false,
        }
    }

    /// Enable or disable IPv4 reporting
    pub fn with_ipv4(mut self, enabled: bool) -> Self {
        self.ipv4 = enabled;
        self
    }

    /// Enable or disable IPv6 reporting
    pub fn with_ipv6(mut self, enabled: bool) -> Self {
        self.ipv6 = enabled;
        self
    }

    /// Target these hostnames, clearing any location
    pub fn with_hostnames<I, S>(mut self, hostnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_hostnames(hostnames);
        self
    }

    /// Target a location, clearing any hostnames
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.set_location(location);
        self
    }

    /// Override the API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Target these hostnames, clearing any location
    pub fn set_hostnames<I, S>(&mut self, hostnames: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targeting = Targeting::hostnames(hostnames);
    }

    /// Target a location, clearing any hostnames
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.targeting = Targeting::location(location);
    }

    /// Enable or disable IPv4 reporting
    pub fn set_ipv4(&mut self, enabled: bool) {
        self.ipv4 = enabled;
    }

    /// Enable or disable IPv6 reporting
    pub fn set_ipv6(&mut self, enabled: bool) {
        self.ipv6 = enabled;
    }

    /// Override the API endpoint
    ///
    /// The value is stored as given; [`ClientConfig::validate`] rejects a
    /// malformed endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The clear-text password, for hashing only
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    pub fn ipv4(&self) -> bool {
        self.ipv4
    }

    pub fn ipv6(&self) -> bool {
        self.ipv6
    }

    /// Parse the endpoint into a URL
    ///
    /// Only absolute `http` and `https` URLs are accepted.
    pub fn endpoint_url(&self) -> Result<Url, crate::Error> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            crate::Error::config(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(crate::Error::config(format!(
                    "Endpoint must use HTTP or HTTPS scheme. Got: {}",
                    scheme
                )));
            }
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(crate::Error::config(format!(
                "Endpoint has no host: {}",
                self.endpoint
            )));
        }

        Ok(url)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.username.is_empty() {
            return Err(crate::Error::config("Username cannot be empty"));
        }

        self.targeting.validate()?;
        self.endpoint_url()?;

        Ok(())
    }
}

// Custom Debug implementation that hides the password
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("endpoint", &self.endpoint)
            .field("targeting", &self.targeting)
            .field("ipv4", &self.ipv4)
            .field("ipv6", &self.ipv6)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_ipv4() -> bool {
    true
}
