// # dynu-core
//
// Core library for the Dynu IP update client.
//
// ## Architecture Overview
//
// This library holds everything that does not depend on a concrete HTTP stack:
// - **Response**: Codec turning the registrar's line-oriented body into status codes
// - **ResponseErrors**: Error model aggregating every failing code of one response
// - **HttpTransport**: Capability trait for "send a request, receive a response"
// - **Logger**: Optional capability receiving formatted client messages
// - **ClientConfig**: Identity, targeting and address-family settings
//
// ## Design Principles
//
// 1. **Transport-Agnostic**: The HTTP client is injected, never hard-wired here
// 2. **No Hidden Retries**: Errors carry a retryable flag; callers own the policy
// 3. **Lossless Errors**: Every failing record is kept with its index and detail
// 4. **Secrets Stay Secret**: Passwords never reach a log sink or `Debug` output

pub mod config;
pub mod error;
pub mod response;
pub mod traits;

// Re-export core types for convenience
pub use config::{ClientConfig, Targeting, DEFAULT_ENDPOINT, UPDATE_PATH};
pub use error::{Error, Result};
pub use response::{Response, ResponseCode, ResponseErrors, UpdateError};
pub use traits::{HttpTransport, Logger, TracingLogger, TransportResponse, UpdateRequest};
