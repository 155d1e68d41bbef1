//! Contract Test: Logging Never Leaks Credentials
//!
//! Constraints verified:
//! - An injected logger receives request and outcome messages
//! - Neither the clear-text password nor its digest reaches the logger
//! - Without a logger, updates still work (the logger is optional)

mod common;

use common::*;
use dynu_client::{hash_password, ClientConfig, DynuClient};
use std::net::IpAddr;
use std::sync::Arc;

const PASSWORD: &str = "s3cr3t-p4ssw0rd";

#[tokio::test]
async fn logger_receives_messages_without_password() {
    let transport = Arc::new(RecordingTransport::new("good\n\rbadauth wrong password"));
    let logger = Arc::new(CapturingLogger::new());

    let client = DynuClient::with_transport(
        ClientConfig::new("foo", PASSWORD).with_hostnames(["a.example.com", "b.example.com"]),
        transport.clone(),
    )
    .unwrap()
    .with_logger(logger.clone());

    let _ = client.update(&[IpAddr::from([203, 0, 113, 9])]).await;

    let lines = logger.lines();
    assert!(!lines.is_empty(), "logger should have been called");
    assert!(lines.iter().any(|l| l.contains("myip=203.0.113.9")));
    assert!(lines.iter().any(|l| l.contains("1 error(s)")));

    let digest = hash_password(PASSWORD);
    for line in &lines {
        assert!(!line.contains(PASSWORD), "password leaked: {}", line);
        assert!(!line.contains(&digest), "password digest leaked: {}", line);
    }
}

#[tokio::test]
async fn transport_failures_are_logged() {
    let transport = Arc::new(FailingTransport::new());
    let logger = Arc::new(CapturingLogger::new());

    let client = DynuClient::with_transport(test_config(), transport)
        .unwrap()
        .with_logger(logger.clone());

    assert!(client.update(&[]).await.is_err());
    assert!(
        logger
            .lines()
            .iter()
            .any(|l| l.contains("connection reset by peer"))
    );
}

#[tokio::test]
async fn logger_is_optional() {
    let transport = Arc::new(RecordingTransport::new("nochg"));
    let client = client_with(test_config(), transport);
    assert!(client.update(&[]).await.is_ok());
}

#[test]
fn debug_output_hides_password() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let client = client_with(ClientConfig::new("foo", PASSWORD), transport);

    let request = client.build_request(&[]);
    assert!(!format!("{:?}", client).contains(PASSWORD));
    assert!(!format!("{:?}", request).contains(&hash_password(PASSWORD)));
}
