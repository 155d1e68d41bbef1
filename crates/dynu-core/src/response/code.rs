//! Status codes returned by the IP update API

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How long a client must suspend updates after a `911` maintenance halt
pub const MAINTENANCE_PAUSE: Duration = Duration::from_secs(10 * 60);

/// A status code from one record of an update response
///
/// Known codes map to dedicated variants. Anything else is kept verbatim
/// (lower-cased and trimmed) in [`ResponseCode::Other`] so that codes added
/// by the server later still round-trip through the error model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// `good`: the update was accepted
    Good,
    /// `nochg`: the address was already current
    NoChange,
    /// `badauth`: authentication failed, or an identity parameter was not recognized
    BadAuth,
    /// `servererror`: the server failed; the request may be sent again
    ServerError,
    /// `notfqdn`: a hostname is not fully qualified
    NotFqdn,
    /// `numhost`: too many hostnames in one request
    NumHost,
    /// `abuse`: the update was refused because of abusive behaviour
    Abuse,
    /// `nohost`: hostname or username not found
    NoHost,
    /// `911`: updates are halted for maintenance; pause for [`MAINTENANCE_PAUSE`]
    Maintenance,
    /// `dnserr`: transient server-side DNS error; retry
    DnsError,
    /// `!donator`: the feature is reserved for members
    NotDonator,
    /// `unknown`: the request or its parameters were not understood
    Unknown,
    /// Any code outside the known vocabulary, including the empty code
    Other(String),
}

impl ResponseCode {
    /// Parse a code token
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. This
    /// never fails; unrecognized tokens become [`ResponseCode::Other`].
    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "good" => Self::Good,
            "nochg" => Self::NoChange,
            "badauth" => Self::BadAuth,
            "servererror" => Self::ServerError,
            "notfqdn" => Self::NotFqdn,
            "numhost" => Self::NumHost,
            "abuse" => Self::Abuse,
            "nohost" => Self::NoHost,
            "911" => Self::Maintenance,
            "dnserr" => Self::DnsError,
            "!donator" => Self::NotDonator,
            "unknown" => Self::Unknown,
            _ => Self::Other(token),
        }
    }

    /// The wire text of this code
    pub fn as_str(&self) -> &str {
        match self {
            Self::Good => "good",
            Self::NoChange => "nochg",
            Self::BadAuth => "badauth",
            Self::ServerError => "servererror",
            Self::NotFqdn => "notfqdn",
            Self::NumHost => "numhost",
            Self::Abuse => "abuse",
            Self::NoHost => "nohost",
            Self::Maintenance => "911",
            Self::DnsError => "dnserr",
            Self::NotDonator => "!donator",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this code reports a failed request
    ///
    /// Only `good` and `nochg` are successes.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Good | Self::NoChange)
    }

    /// Whether a failure with this code may succeed when retried unchanged
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::ServerError | Self::Maintenance | Self::DnsError)
    }

    /// Minimum pause the server asks for before the next attempt, if any
    pub fn suggested_delay(&self) -> Option<Duration> {
        match self {
            Self::Maintenance => Some(MAINTENANCE_PAUSE),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ResponseCode {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
