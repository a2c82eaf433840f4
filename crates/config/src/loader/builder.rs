//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges the stdin payload,
//!   environment variables and direct builder calls.
//! - Build the final, validated `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Payload wire format details (delegated to payload.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over payload values.
//! - Builder methods take precedence over environment variables.
//! - Blank strings are treated exactly like absent values.
//! - Malformed optional settings are held back until `build()` has checked
//!   the mandatory fields.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::io::Read;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use super::payload::{AlertPayload, PayloadConfiguration, parse_u64_setting};
use crate::constants::{
    DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SKIP_VERIFY, DEFAULT_SPLUNK_PORT,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, WAIT_LOG_INTERVAL_SECS,
};
use crate::types::{Config, ConnectionConfig, Credentials, PollingConfig, ServiceEndpoint};

/// Configuration loader that builds config from the payload and environment.
#[derive(Default)]
pub struct ConfigLoader {
    query: Option<String>,
    report_name: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    url: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_wait_secs: Option<u64>,
    poll_interval_ms: Option<u64>,
    /// First malformed optional setting seen while loading.
    deferred_error: Option<ConfigError>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the JSON payload from a reader (stdin in production).
    pub fn from_payload_reader<R: Read>(self, mut reader: R) -> Result<Self, ConfigError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        self.from_payload_str(&raw)
    }

    /// Parse a JSON payload string and apply its values.
    pub fn from_payload_str(self, raw: &str) -> Result<Self, ConfigError> {
        let payload: AlertPayload =
            serde_json::from_str(raw).map_err(ConfigError::InvalidPayload)?;
        Ok(self.with_payload(payload.configuration))
    }

    /// Apply already-deserialized payload values.
    pub fn with_payload(mut self, payload: PayloadConfiguration) -> Self {
        self.query = payload.query;
        self.report_name = payload.report_name;
        self.username = payload.username;
        self.password = payload.password.map(|p| SecretString::new(p.into()));
        self.url = payload.url;
        if let Some(raw) = payload.max_wait_secs {
            match parse_u64_setting("max_wait_secs", &raw) {
                Ok(secs) => self.max_wait_secs = secs,
                Err(e) => self.defer(e),
            }
        }
        if let Some(raw) = payload.poll_interval_ms {
            match parse_u64_setting("poll_interval_ms", &raw) {
                Ok(ms) => self.poll_interval_ms = ms,
                Err(e) => self.defer(e),
            }
        }
        self
    }

    /// Read operational overrides from environment variables.
    ///
    /// Environment variables take precedence over payload settings. Malformed
    /// values are reported by `build()`.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the ad-hoc query.
    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the saved search name.
    pub fn with_report_name(mut self, name: String) -> Self {
        self.report_name = Some(name);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the search jobs URL.
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum result wait in seconds (`0` disables the bound).
    pub fn with_max_wait_secs(mut self, secs: u64) -> Self {
        self.max_wait_secs = Some(secs);
        self
    }

    /// Set the delay between result polls in milliseconds.
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = Some(ms);
        self
    }

    /// Build the final configuration.
    ///
    /// Mandatory fields are checked first so that a payload lacking
    /// credentials is reported as such even when other values are malformed.
    pub fn build(mut self) -> Result<Config, ConfigError> {
        let username = non_blank(self.username);
        let password = self
            .password
            .filter(|p| !p.expose_secret().trim().is_empty());
        let url = non_blank(self.url);

        let (username, password, url) = match (username, password, url) {
            (Some(u), Some(p), Some(url)) => (u, p, url),
            (username, password, url) => {
                let mut fields = Vec::new();
                if username.is_none() {
                    fields.push("username");
                }
                if password.is_none() {
                    fields.push("password");
                }
                if url.is_none() {
                    fields.push("url");
                }
                debug!("Missing mandatory configuration fields: {:?}", fields);
                return Err(ConfigError::MissingRequired { fields });
            }
        };

        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }

        let connection = ConnectionConfig {
            skip_verify: self.skip_verify.unwrap_or(DEFAULT_SKIP_VERIFY),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        Self::validate_connection(&connection)?;

        let max_wait_secs = self.max_wait_secs.unwrap_or(DEFAULT_MAX_WAIT_SECS);
        let polling = PollingConfig {
            max_wait: (max_wait_secs > 0).then(|| Duration::from_secs(max_wait_secs)),
            poll_interval: Duration::from_millis(
                self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            ),
            wait_log_interval: Duration::from_secs(WAIT_LOG_INTERVAL_SECS),
        };

        Ok(Config {
            query: non_blank(self.query),
            report_name: non_blank(self.report_name),
            credentials: Credentials::new(username, password),
            service: parse_service_endpoint(&url)?,
            connection,
            polling,
        })
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        if connection.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if connection.timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    /// Keep the first malformed setting for `build()` to report.
    pub(crate) fn defer(&mut self, err: ConfigError) {
        if self.deferred_error.is_none() {
            debug!("Deferring configuration error: {}", err);
            self.deferred_error = Some(err);
        }
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_wait_secs(&mut self, secs: Option<u64>) {
        self.max_wait_secs = secs;
    }

    pub(crate) fn set_poll_interval_ms(&mut self, ms: Option<u64>) {
        self.poll_interval_ms = ms;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validates the configured search jobs URL and derives the service endpoint.
///
/// Validation rules:
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Keep an explicit port, including a scheme default such as `:443`
/// - Default the port to 8089 when the URL has none
/// - Normalize the jobs URL by stripping trailing slashes
fn parse_service_endpoint(raw: &str) -> Result<ServiceEndpoint, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "url".into(),
        message: format!(
            "must be an absolute http(s) URL (e.g. https://localhost:8089/services/search/jobs): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ConfigError::InvalidValue {
            var: "url".into(),
            message: "host is required (e.g. https://localhost:8089/services/search/jobs)".into(),
        })?;

    Ok(ServiceEndpoint {
        jobs_url: parsed.as_str().trim_end_matches('/').to_string(),
        scheme: scheme.to_string(),
        host: host.to_string(),
        port: parsed
            .port()
            .or_else(|| explicit_port(trimmed))
            .unwrap_or(DEFAULT_SPLUNK_PORT),
    })
}

/// Port written in the authority of `raw`.
///
/// `url` normalizes away a port equal to the scheme default, so `:443` on
/// https has to be read from the raw text.
fn explicit_port(raw: &str) -> Option<u16> {
    let rest = raw.split_once("://")?.1;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let port_part = match host_port.rfind(']') {
        Some(end) => &host_port[end + 1..],
        None => host_port,
    };
    let (_, port) = port_part.rsplit_once(':')?;
    port.parse().ok()
}
