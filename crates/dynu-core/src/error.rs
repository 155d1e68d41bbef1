//! Error types for the Dynu update client
//!
//! This module defines the crate-wide error type. Per-record protocol failures
//! live in [`crate::response`] and are carried here by [`Error::Update`].

use crate::response::ResponseErrors;
use thiserror::Error;

/// Result type alias for update operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the Dynu update client
#[derive(Error, Debug)]
pub enum Error {
    /// The transport could not deliver the request or receive a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded as text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Reading the response body failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (malformed endpoint, missing identity, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The registrar answered with one or more failing status codes
    #[error(transparent)]
    Update(#[from] ResponseErrors),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The per-record failures, if this error came from a parsed response
    ///
    /// Transport, decode and configuration failures return `None`; they are
    /// not classified as retryable or terminal.
    pub fn update_errors(&self) -> Option<&ResponseErrors> {
        match self {
            Self::Update(errors) => Some(errors),
            _ => None,
        }
    }
}
