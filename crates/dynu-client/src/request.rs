//! Update request construction
//!
//! ```text
//! GET {endpoint}/nic/update?hostname=a.example.com,b.example.com&myip=1.2.3.4&myipv6=no&password=<sha256>
//! GET {endpoint}/nic/update?location=home&myip=1.2.3.4&myipv6=no&password=<sha256>&username=<user>
//! ```
//!
//! Keys are emitted in sorted order so that the same configuration and
//! address list always produce the same URL.

use crate::password::hash_password;
use dynu_core::config::{ClientConfig, Targeting, UPDATE_PATH};
use dynu_core::traits::transport::PASSWORD_PARAM;
use dynu_core::UpdateRequest;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use url::Url;

/// Value sent for an address family that is not being reported
pub const NO_ADDRESS: &str = "no";

/// The addresses that end up in one request
///
/// IPv4-mapped IPv6 addresses count as IPv4. When several addresses of one
/// family are given, the last one wins. Addresses of a disabled family are
/// dropped without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportedAddresses {
    pub v4: Option<Ipv4Addr>,
    pub v6: Option<Ipv6Addr>,
}

impl ReportedAddresses {
    /// Pick the reported addresses from a caller-supplied list
    pub fn select(addresses: &[IpAddr], ipv4: bool, ipv6: bool) -> Self {
        let mut selected = Self::default();
        for address in addresses {
            match address.to_canonical() {
                IpAddr::V4(v4) if ipv4 => selected.v4 = Some(v4),
                IpAddr::V6(v6) if ipv6 => selected.v6 = Some(v6),
                _ => {}
            }
        }
        selected
    }

    /// Value of the `myip` parameter
    pub fn myip(&self) -> String {
        self.v4
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| NO_ADDRESS.to_string())
    }

    /// Value of the `myipv6` parameter
    pub fn myipv6(&self) -> String {
        self.v6
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| NO_ADDRESS.to_string())
    }
}

/// Build the GET request for one update
///
/// `endpoint` must be the validated form of `config.endpoint()`; its path,
/// query and fragment are replaced.
pub fn build_request(config: &ClientConfig, endpoint: &Url, addresses: &[IpAddr]) -> UpdateRequest {
    let reported = ReportedAddresses::select(addresses, config.ipv4(), config.ipv6());
    build_request_for(config, endpoint, &reported)
}

/// Build the GET request for addresses that were already selected
pub(crate) fn build_request_for(
    config: &ClientConfig,
    endpoint: &Url,
    reported: &ReportedAddresses,
) -> UpdateRequest {
    let mut query: BTreeMap<&'static str, String> = BTreeMap::new();
    query.insert(PASSWORD_PARAM, hash_password(config.password()));

    match config.targeting() {
        Targeting::Hostnames(hostnames) => {
            query.insert("hostname", hostnames.join(","));
        }
        Targeting::Location(location) => {
            query.insert("username", config.username().to_string());
            query.insert("location", location.clone());
        }
        Targeting::Account => {
            query.insert("username", config.username().to_string());
        }
    }

    query.insert("myip", reported.myip());
    query.insert("myipv6", reported.myipv6());

    let mut url = endpoint.clone();
    url.set_path(UPDATE_PATH);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

    UpdateRequest::get(url)
}
