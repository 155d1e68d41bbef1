//! Contract Test: Request Construction
//!
//! This test verifies the exact shape of the GET request sent to the server.
//!
//! Constraints verified:
//! - The password only travels as its SHA-256 hex digest
//! - Hostname targeting never sends `username` or `location`
//! - Location targeting sends `username` and `location`, never `hostname`
//! - Disabled address families are reported as the literal `no`
//! - The last address of each enabled family wins
//!
//! If this test fails, the server will reject or misroute updates.

mod common;

use common::*;
use dynu_client::{hash_password, ClientConfig};
use std::net::IpAddr;
use std::sync::Arc;

fn ip(s: &str) -> IpAddr {
    s.parse().expect("valid test address")
}

#[tokio::test]
async fn hostnames_request_matches_wire_format() {
    let transport = Arc::new(RecordingTransport::new("good\n\r"));
    let client = client_with(
        test_config().with_hostnames(["dionysus.myddns.rocks"]),
        Arc::clone(&transport),
    );

    client.update(&[ip("14.14.22.149")]).await.expect("good response");

    let request = transport.last_request();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.url().as_str(),
        format!(
            "https://api.dynu.com/nic/update?hostname=dionysus.myddns.rocks&myip=14.14.22.149&myipv6=no&password={}",
            hash_password("bar")
        )
    );
}

#[tokio::test]
async fn ipv4_only_family_filtering() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let client = client_with(test_config(), Arc::clone(&transport));

    client
        .update(&[ip("14.14.22.149"), ip("2001:db8::10")])
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.query("myip").as_deref(), Some("14.14.22.149"));
    assert_eq!(request.query("myipv6").as_deref(), Some("no"));
}

#[tokio::test]
async fn both_families_reported_when_enabled() {
    let transport = Arc::new(RecordingTransport::new("good\n\rgood"));
    let client = client_with(test_config().with_ipv6(true), Arc::clone(&transport));

    client
        .update(&[
            ip("10.0.0.1"),
            ip("2001:db8::1"),
            ip("10.0.0.2"),
            ip("2001:db8::2"),
        ])
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.query("myip").as_deref(), Some("10.0.0.2"));
    assert_eq!(request.query("myipv6").as_deref(), Some("2001:db8::2"));
}

#[tokio::test]
async fn no_addresses_sends_no_for_both_slots() {
    let transport = Arc::new(RecordingTransport::new("nochg"));
    let client = client_with(
        test_config().with_ipv4(false).with_ipv6(true),
        Arc::clone(&transport),
    );

    client.update(&[ip("192.0.2.1")]).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.query("myip").as_deref(), Some("no"));
    assert_eq!(request.query("myipv6").as_deref(), Some("no"));
}

#[tokio::test]
async fn account_targeting_sends_username() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let client = client_with(test_config(), Arc::clone(&transport));

    client.update(&[]).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.query("username").as_deref(), Some("foo"));
    assert_eq!(request.query("hostname"), None);
    assert_eq!(request.query("location"), None);
}

#[tokio::test]
async fn targeting_is_mutually_exclusive() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let mut client = client_with(
        test_config().with_hostnames(["a.example.com", "b.example.com"]),
        Arc::clone(&transport),
    );

    client.update(&[]).await.unwrap();
    let by_hostname = transport.last_request();
    assert_eq!(
        by_hostname.query("hostname").as_deref(),
        Some("a.example.com,b.example.com")
    );
    assert_eq!(by_hostname.query("username"), None);
    assert_eq!(by_hostname.query("location"), None);

    // Location after hostnames clears the hostnames
    client
        .reconfigure(|config| config.set_location("home"))
        .unwrap();
    client.update(&[]).await.unwrap();
    let by_location = transport.last_request();
    assert_eq!(by_location.query("hostname"), None);
    assert_eq!(by_location.query("username").as_deref(), Some("foo"));
    assert_eq!(by_location.query("location").as_deref(), Some("home"));

    // And hostnames after location clears the location
    client
        .reconfigure(|config| config.set_hostnames(["c.example.com"]))
        .unwrap();
    client.update(&[]).await.unwrap();
    let again = transport.last_request();
    assert_eq!(again.query("hostname").as_deref(), Some("c.example.com"));
    assert_eq!(again.query("location"), None);
    assert_eq!(again.query("username"), None);
}

#[tokio::test]
async fn clear_text_password_never_sent() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let client = client_with(
        ClientConfig::new("foo", "correct horse battery staple"),
        Arc::clone(&transport),
    );

    client.update(&[ip("198.51.100.4")]).await.unwrap();

    let request = transport.last_request();
    let url = request.url().as_str();
    assert!(!url.contains("correct"));
    assert_eq!(
        request.query("password"),
        Some(hash_password("correct horse battery staple"))
    );
}

#[tokio::test]
async fn custom_endpoint_keeps_only_origin() {
    let transport = Arc::new(RecordingTransport::new("good"));
    let client = client_with(
        test_config().with_endpoint("http://127.0.0.1:8245/ignored/path"),
        Arc::clone(&transport),
    );

    client.update(&[]).await.unwrap();

    let request = transport.last_request();
    assert!(
        request
            .url()
            .as_str()
            .starts_with("http://127.0.0.1:8245/nic/update?")
    );
}
