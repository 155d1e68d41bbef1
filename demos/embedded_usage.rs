//! Minimal embedding example for dynu-client
//!
//! This example demonstrates using the client as a library with a custom
//! transport and logger. The application owns the retry policy; the client
//! only reports which failures are worth retrying.

use dynu_client::{
    ClientConfig, DynuClient, Error, HttpTransport, Logger, Result, TransportResponse,
    UpdateRequest,
};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Transport that plays back canned server answers instead of using the network
struct ScriptedTransport {
    answers: Vec<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    fn new(answers: Vec<&'static str>) -> Self {
        Self {
            answers,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &UpdateRequest) -> Result<TransportResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        println!("[Transport] {} {}", request.method(), request.redacted_url());

        let body = self
            .answers
            .get(call)
            .ok_or_else(|| Error::transport("script exhausted"))?;
        Ok(TransportResponse::new(200, *body))
    }

    fn transport_name(&self) -> &'static str {
        "scripted"
    }
}

/// Logger that prefixes messages for the console
struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        println!("[Client] {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    println!("=== Embedded dynu-client Example ===\n");

    // First answer asks for a retry, second accepts the update
    let transport = Arc::new(ScriptedTransport::new(vec![
        "dnserr\n\rgood",
        "good 203.0.113.9\n\rnochg 203.0.113.9",
    ]));

    let config = ClientConfig::new("alice", "example-password")
        .with_hostnames(["home.example.com", "nas.example.com"])
        .with_ipv6(true);

    let client = DynuClient::with_transport(config, transport)?.with_logger(Arc::new(ConsoleLogger));

    let addresses: Vec<IpAddr> = vec![IpAddr::from([203, 0, 113, 9])];

    for attempt in 1..=2 {
        println!("\n{}. Sending update...", attempt);
        match client.update(&addresses).await {
            Ok(()) => {
                println!("   Update accepted");
                break;
            }
            Err(e) => match e.update_errors() {
                Some(errors) if errors.all_temporary() => {
                    // A real application would wait here, at least
                    // errors.suggested_delay() when one is given
                    println!("   Retryable failure, trying again: {}", errors);
                }
                _ => return Err(e),
            },
        }
    }

    println!("\n=== Embedding Successful ===");
    println!("Key Points:");
    println!("- Transport and logger are injected by the application");
    println!("- Retry decisions stay with the application");
    println!("- The password never appears in output");

    Ok(())
}
