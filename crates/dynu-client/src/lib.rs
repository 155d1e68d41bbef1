// # Dynu Update Client
//
// This crate provides the client for the Dynu IP update API.
//
// ## Scope
//
// - ✅ One HTTP GET per `update` call
// - ✅ Password sent as its SHA-256 hex digest, never in clear text
// - ✅ Hostname list or location targeting (mutually exclusive)
// - ✅ Per-record errors with a retryable flag
// - ❌ NO retry or backoff (owned by the caller)
// - ❌ NO scheduling or IP change detection (owned by the caller)
// - ❌ NO persisted state between calls
//
// ## Security Requirements
//
// - The password NEVER appears in logs or `Debug` output
// - Logged URLs have the password parameter masked
//
// ## API Reference
//
// - Update: GET `/nic/update?hostname=..&myip=..&myipv6=..&password=..`
// - Update by account: GET `/nic/update?username=..[&location=..]&myip=..&myipv6=..&password=..`
//
// ## Usage
//
// ```rust,ignore
// use dynu_client::DynuClient;
//
// let client = DynuClient::from_config(
//     ClientConfig::new("user", "pass").with_hostnames(["home.example.com"]),
// )?;
//
// match client.update(&["203.0.113.9".parse()?]).await {
//     Ok(()) => {}
//     Err(e) => match e.update_errors() {
//         Some(errors) if errors.all_temporary() => { /* retry later */ }
//         _ => return Err(e.into()),
//     },
// }
// ```

mod client;
mod password;
mod request;
mod transport;

pub use client::DynuClient;
pub use password::hash_password;
pub use request::{build_request, ReportedAddresses, NO_ADDRESS};
pub use transport::ReqwestTransport;

// Re-export the core vocabulary so most callers need only this crate
pub use dynu_core::{
    ClientConfig, Error, HttpTransport, Logger, Response, ResponseCode, ResponseErrors, Result,
    Targeting, TracingLogger, TransportResponse, UpdateError, UpdateRequest,
};
