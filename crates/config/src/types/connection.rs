//! Connection, polling and top-level configuration types.
//!
//! Responsibilities:
//! - Define connection settings (TLS verification, request timeout).
//! - Define polling settings for the ad-hoc result poller.
//! - Define the derived service endpoint and the main `Config` structure.
//!
//! Does NOT handle:
//! - Parsing or validating raw values (see `loader` module).
//!
//! Invariants:
//! - `ServiceEndpoint::jobs_url` never ends with a slash.
//! - `ServiceEndpoint::port` is always populated (8089 when the URL has none).
//! - `PollingConfig::max_wait` of `None` means polling is unbounded.

use std::time::Duration;

use crate::constants::{
    DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SKIP_VERIFY, DEFAULT_TIMEOUT_SECS,
    WAIT_LOG_INTERVAL_SECS,
};
use crate::types::auth::Credentials;

/// HTTP connection settings shared by both clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            skip_verify: DEFAULT_SKIP_VERIFY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings for the ad-hoc search result poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingConfig {
    /// Give up waiting for results after this long. `None` polls forever.
    pub max_wait: Option<Duration>,
    /// Delay between consecutive result requests.
    pub poll_interval: Duration,
    /// Minimum spacing between "still waiting" log lines.
    pub wait_log_interval: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_wait: Some(Duration::from_secs(DEFAULT_MAX_WAIT_SECS)),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            wait_log_interval: Duration::from_secs(WAIT_LOG_INTERVAL_SECS),
        }
    }
}

/// Endpoints derived from the configured service URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    /// Search jobs endpoint exactly as configured (e.g. `https://host:8089/services/search/jobs`).
    pub jobs_url: String,
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    /// Base URL for the session client (`scheme://host:port`).
    pub fn session_base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Validated configuration for one alert execution.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ad-hoc SPL query; `None` skips the ad-hoc path.
    pub query: Option<String>,
    /// Saved search name; `None` skips the saved-search path.
    pub report_name: Option<String>,
    pub credentials: Credentials,
    pub service: ServiceEndpoint,
    pub connection: ConnectionConfig,
    pub polling: PollingConfig,
}
