//! Capability traits for the Dynu update client
//!
//! The client depends on two injected capabilities:
//!
//! - [`HttpTransport`]: Send an update request, receive the response
//! - [`Logger`]: Receive formatted diagnostic messages (optional)

pub mod logger;
pub mod transport;

pub use logger::{Logger, TracingLogger};
pub use transport::{HttpTransport, TransportResponse, UpdateRequest};
