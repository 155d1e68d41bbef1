//! Test doubles and common utilities for client contract tests
//!
//! These doubles stand in for the HTTP stack and the log sink so the tests
//! can observe exactly what the client sends and logs.

#![allow(dead_code)]

use dynu_client::{
    ClientConfig, DynuClient, Error, HttpTransport, Logger, Result, TransportResponse,
    UpdateRequest,
};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A transport that records every request and answers with a fixed body
pub struct RecordingTransport {
    status: u16,
    body: Vec<u8>,
    requests: Arc<Mutex<Vec<UpdateRequest>>>,
}

impl RecordingTransport {
    pub fn new(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the requests sent so far
    pub fn requests(&self) -> Vec<UpdateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of times send() was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request
    pub fn last_request(&self) -> UpdateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

#[async_trait::async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: &UpdateRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }

    fn transport_name(&self) -> &'static str {
        "recording"
    }
}

/// A transport that always fails and counts attempts
#[derive(Default)]
pub struct FailingTransport {
    call_count: AtomicUsize,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HttpTransport for FailingTransport {
    async fn send(&self, _request: &UpdateRequest) -> Result<TransportResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Err(Error::transport("connection reset by peer"))
    }
}

/// A logger that keeps every message
#[derive(Default)]
pub struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Build a client around a shared transport
pub fn client_with(config: ClientConfig, transport: Arc<RecordingTransport>) -> DynuClient {
    DynuClient::with_transport(config, transport).expect("valid test configuration")
}

/// Minimal valid configuration
pub fn test_config() -> ClientConfig {
    ClientConfig::new("foo", "bar")
}
