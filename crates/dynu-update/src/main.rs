// # dynu-update - One-shot Dynu IP update
//
// This binary is a THIN integration layer:
// 1. Read configuration from environment variables
// 2. Initialize logging
// 3. Send exactly one update
// 4. Map the outcome to an exit code
//
// It does not loop, schedule or detect IP changes. Run it from cron, a
// systemd timer or a network hook, and use the exit code to decide whether
// to try again later.
//
// ## Configuration
//
// ### Identity
// - `DYNU_USERNAME`: Account username (required)
// - `DYNU_PASSWORD`: Account password (required, sent as SHA-256 digest)
//
// ### Targeting (at most one)
// - `DYNU_HOSTNAMES`: Comma-separated hostnames to update
// - `DYNU_LOCATION`: Location group to update
//
// ### Addresses
// - `DYNU_ADDRESSES`: Comma-separated IPv4/IPv6 addresses to report (required)
// - `DYNU_IPV4`: Report IPv4 (default: true)
// - `DYNU_IPV6`: Report IPv6 (default: false)
//
// ### Other
// - `DYNU_ENDPOINT`: API endpoint (default: https://api.dynu.com)
// - `DYNU_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export DYNU_USERNAME=alice
// export DYNU_PASSWORD=your_password
// export DYNU_HOSTNAMES=home.example.com
// export DYNU_ADDRESSES=203.0.113.9
//
// dynu-update
// ```

use anyhow::Result;
use dynu_client::{ClientConfig, DynuClient, Error};
use std::env;
use std::net::IpAddr;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the possible outcomes
///
/// - 0: Update accepted
/// - 1: Configuration error
/// - 2: Permanent or unexpected failure
/// - 75: Every failure is retryable (EX_TEMPFAIL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateExitCode {
    /// Every record was `good` or `nochg`
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Failure that needs human attention, or a transport error
    RuntimeError = 2,
    /// Server asked us to come back later
    TemporaryFailure = 75,
}

impl From<UpdateExitCode> for ExitCode {
    fn from(code: UpdateExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    username: String,
    password: String,
    hostnames: Vec<String>,
    location: Option<String>,
    addresses: Vec<IpAddr>,
    ipv4: bool,
    ipv6: bool,
    endpoint: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup function
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let username = var("DYNU_USERNAME").ok_or_else(|| {
            anyhow::anyhow!(
                "DYNU_USERNAME is required. Set it via: export DYNU_USERNAME=your_username"
            )
        })?;
        let password = var("DYNU_PASSWORD").ok_or_else(|| {
            anyhow::anyhow!(
                "DYNU_PASSWORD is required. Set it via: export DYNU_PASSWORD=your_password"
            )
        })?;

        let addresses = var("DYNU_ADDRESSES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<IpAddr>()
                    .map_err(|_| anyhow::anyhow!("DYNU_ADDRESSES contains an invalid address: '{}'", s))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            username,
            password,
            hostnames: var("DYNU_HOSTNAMES")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            location: var("DYNU_LOCATION").map(|s| s.trim().to_string()),
            addresses,
            ipv4: parse_bool("DYNU_IPV4", var("DYNU_IPV4"), true)?,
            ipv6: parse_bool("DYNU_IPV6", var("DYNU_IPV6"), false)?,
            endpoint: var("DYNU_ENDPOINT"),
            log_level: var("DYNU_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    ///
    /// Checks cross-field rules the environment cannot express; endpoint
    /// and hostname syntax are checked again by the client.
    fn validate(&self) -> Result<()> {
        if !self.hostnames.is_empty() && self.location.is_some() {
            anyhow::bail!(
                "DYNU_HOSTNAMES and DYNU_LOCATION are mutually exclusive. Set only one of them."
            );
        }

        if !self.ipv4 && !self.ipv6 {
            anyhow::bail!("DYNU_IPV4 and DYNU_IPV6 are both disabled; nothing would be reported");
        }

        if self.addresses.is_empty() {
            anyhow::bail!(
                "DYNU_ADDRESSES must contain at least one address. \
                Set it via: export DYNU_ADDRESSES=203.0.113.9"
            );
        }

        let reportable = self
            .addresses
            .iter()
            .any(|ip| match ip.to_canonical() {
                IpAddr::V4(_) => self.ipv4,
                IpAddr::V6(_) => self.ipv6,
            });
        if !reportable {
            warn!("No address in DYNU_ADDRESSES matches an enabled family; sending 'no' for both");
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "DYNU_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    /// Build the client configuration
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.username.clone(), self.password.clone())
            .with_ipv4(self.ipv4)
            .with_ipv6(self.ipv6);

        if !self.hostnames.is_empty() {
            config.set_hostnames(self.hostnames.iter().cloned());
        } else if let Some(ref location) = self.location {
            config.set_location(location.clone());
        }

        if let Some(ref endpoint) = self.endpoint {
            config.set_endpoint(endpoint.clone());
        }

        config
    }
}

/// Parse a boolean environment value
fn parse_bool(name: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("{} must be true or false. Got: {}", name, v),
        },
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return UpdateExitCode::ConfigError.into();
        }
    };

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    if let Err(e) = config.validate() {
        error!("Configuration validation error: {}", e);
        return UpdateExitCode::ConfigError.into();
    }

    let client = match DynuClient::from_config(config.client_config()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return UpdateExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return UpdateExitCode::RuntimeError.into();
        }
    };

    info!("Reporting {} address(es)", config.addresses.len());

    let outcome = rt.block_on(client.update(&config.addresses));
    exit_code_for(&outcome).into()
}

/// Map an update outcome to an exit code, logging what the caller should do
fn exit_code_for(outcome: &dynu_client::Result<()>) -> UpdateExitCode {
    match outcome {
        Ok(()) => {
            info!("Update complete");
            UpdateExitCode::Success
        }
        Err(Error::Update(errors)) if errors.all_temporary() => {
            match errors.suggested_delay() {
                Some(delay) => warn!(
                    "Server asked to pause updates for {} second(s): {}",
                    delay.as_secs(),
                    errors
                ),
                None => warn!("Temporary failure, retry later: {}", errors),
            }
            UpdateExitCode::TemporaryFailure
        }
        Err(Error::Update(errors)) => {
            error!("Update rejected; check credentials and hostnames: {}", errors);
            UpdateExitCode::RuntimeError
        }
        Err(e) => {
            error!("Update failed: {}", e);
            UpdateExitCode::RuntimeError
        }
    }
}
